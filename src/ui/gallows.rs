/// The gallows drawing, one frame per stage of trouble. Frame 0 is an empty
/// scaffold; the last frame is the fully drawn figure of a lost round.
const FRAMES: [&str; 8] = [
    r#"
  +---+
  |   |
      |
      |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
      |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
  |   |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|   |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|\  |
  |   |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|\  |
  |   |
 /    |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|\  |
  |   |
 / \  |
========="#,
];

/// Height in terminal rows of every frame, for layout math.
pub const FRAME_HEIGHT: u16 = 8;

/// Pick the frame for `misses_used` out of an `allowed` budget. Budgets that
/// are not exactly 7 are scaled onto the drawing's stages; a spent budget
/// always lands on the final frame.
pub fn frame(misses_used: usize, allowed: usize) -> &'static str {
    let last = FRAMES.len() - 1;
    let stage = if allowed == 0 || misses_used >= allowed {
        last
    } else {
        (misses_used * last) / allowed
    };

    FRAMES[stage]
}

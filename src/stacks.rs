//! LIFO stacks driving `GOSUB`/`RETURN` and `FOR`/`NEXT` (`spec.md` §3).

/// Lives on the for-stack from `FOR` until `NEXT` observes the incremented
/// index outside `[lower, upper_exclusive)`, or the enclosing `END`/stop
/// tears it down.
#[derive(Clone, Debug, PartialEq)]
pub struct LoopFrame {
  pub index_name: String,
  pub lower: i64,
  pub upper_exclusive: i64,
  pub start_line: usize,
}

#[derive(Default)]
pub struct GosubStack(Vec<usize>);

impl GosubStack {
  pub fn new() -> Self {
    GosubStack(Vec::new())
  }

  pub fn push(&mut self, pc: usize) {
    self.0.push(pc);
  }

  pub fn pop(&mut self) -> Option<usize> {
    self.0.pop()
  }

  pub fn clear(&mut self) {
    self.0.clear();
  }
}

#[derive(Default)]
pub struct ForStack(Vec<LoopFrame>);

impl ForStack {
  pub fn new() -> Self {
    ForStack(Vec::new())
  }

  pub fn push(&mut self, frame: LoopFrame) {
    self.0.push(frame);
  }

  pub fn pop(&mut self) -> Option<LoopFrame> {
    self.0.pop()
  }

  pub fn top(&self) -> Option<&LoopFrame> {
    self.0.last()
  }

  pub fn top_mut(&mut self) -> Option<&mut LoopFrame> {
    self.0.last_mut()
  }

  pub fn clear(&mut self) {
    self.0.clear();
  }
}

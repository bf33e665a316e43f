/// Linear cursor over an ordered prompt list. Never wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptWalker<'a> {
    prompts: &'a [&'a str],
    index: usize,
}

impl<'a> PromptWalker<'a> {
    pub fn new(prompts: &'a [&'a str]) -> Self {
        Self { prompts, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn current(&self) -> Option<&'a str> {
        self.prompts.get(self.index).copied()
    }

    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.prompts.len()
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    /// Step forward. Returns `false` at the last prompt.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Step back. Returns `false` at the first prompt.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.index -= 1;
        true
    }
}

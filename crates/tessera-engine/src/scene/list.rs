use super::{CmdKind, DrawCmd};

/// Recorded draw stream for a frame, in submission order.
///
/// Submission order is paint order: later commands paint over earlier ones.
/// `push()` is O(1); `clear()` keeps the allocation for the next frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    /// Commands in submission order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Splits the stream into maximal runs of the same command kind.
    ///
    /// Runs preserve submission order, so a consumer that renders batch by batch
    /// keeps the same overlap as one that renders command by command.
    pub fn batches(&self) -> Batches<'_> {
        Batches { rest: &self.cmds }
    }
}

/// Iterator returned by [`DrawList::batches`].
pub struct Batches<'a> {
    rest: &'a [DrawCmd],
}

impl<'a> Iterator for Batches<'a> {
    type Item = (CmdKind, &'a [DrawCmd]);

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.rest.first()?.kind();
        let len = self.rest.iter().take_while(|c| c.kind() == kind).count();
        let (batch, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some((kind, batch))
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCmd;
    type IntoIter = std::slice::Iter<'a, DrawCmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.cmds.iter()
    }
}

//! Local variables of one function body.
//!
//! Every local gets an 8-byte stack slot. Slots are handed out in
//! declaration order: the first local lives at offset 8, the next at 16,
//! and so on.

/// Size of one stack slot in bytes.
const SLOT_SIZE: u32 = 8;

/// A declared local variable and its frame offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocalVar<'src> {
    /// Variable name, borrowed from the source buffer.
    pub name: &'src str,
    /// Offset below the frame base.
    pub offset: u32,
}

/// Ordered table of locals, built while parsing a function body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Locals<'src> {
    vars: Vec<LocalVar<'src>>,
}

impl<'src> Locals<'src> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocalVar<'src>> {
        self.vars.iter()
    }

    /// Look up a local by name.
    pub fn find(&self, name: &str) -> Option<&LocalVar<'src>> {
        self.vars.iter().find(|var| var.name == name)
    }

    /// Return the local called `name`, declaring it in the next free slot
    /// if it does not exist yet.
    pub fn get_or_declare(&mut self, name: &'src str) -> LocalVar<'src> {
        if let Some(var) = self.find(name) {
            return *var;
        }
        let var = LocalVar {
            name,
            offset: self.frame_size() + SLOT_SIZE,
        };
        self.vars.push(var);
        var
    }

    /// Bytes of stack the declared locals occupy.
    pub fn frame_size(&self) -> u32 {
        self.vars.last().map_or(0, |var| var.offset)
    }
}

impl<'a, 'src> IntoIterator for &'a Locals<'src> {
    type Item = &'a LocalVar<'src>;
    type IntoIter = std::slice::Iter<'a, LocalVar<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

#[cfg(test)]
mod tests;

use std::{collections::HashMap, fmt};

/// A literal value stored in the constant pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constant {
    /// An integer literal.
    Integer(i64),
    /// A string literal, without its quotes.
    Str(String),
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "'{s}'"),
        }
    }
}

/// Identifies a constant by its position in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstId(pub usize);

impl fmt::Display for ConstId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered table of literals referenced by `LOAD_CONST`.
///
/// Values live in a vector indexed by id; a separate map answers the reverse
/// question. Ids are handed out densely from zero in order of first
/// insertion, and interning a value that is already present returns its
/// existing id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantPool {
    values: Vec<Constant>,
    ids:    HashMap<Constant, ConstId>,
}

impl ConstantPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `constant`, adding it to the pool first if needed.
    ///
    /// # Example
    /// ```
    /// use sabdastra::toolchain::compiler::constant_pool::{ConstId, Constant, ConstantPool};
    ///
    /// let mut pool = ConstantPool::new();
    ///
    /// assert_eq!(pool.intern(Constant::Integer(7)), ConstId(0));
    /// assert_eq!(pool.intern(Constant::Str("om".to_string())), ConstId(1));
    /// assert_eq!(pool.intern(Constant::Integer(7)), ConstId(0));
    /// assert_eq!(pool.len(), 2);
    /// ```
    pub fn intern(&mut self, constant: Constant) -> ConstId {
        if let Some(id) = self.ids.get(&constant) {
            return *id;
        }

        let id = ConstId(self.values.len());
        self.values.push(constant.clone());
        self.ids.insert(constant, id);
        id
    }

    /// Returns the constant stored under `id`.
    #[must_use]
    pub fn get(&self, id: ConstId) -> Option<&Constant> {
        self.values.get(id.0)
    }

    /// Returns the id of `constant` if it has been interned.
    #[must_use]
    pub fn id_of(&self, constant: &Constant) -> Option<ConstId> {
        self.ids.get(constant).copied()
    }

    /// Number of distinct constants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no constant has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(id, constant)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ConstId, &Constant)> {
        self.values.iter().enumerate().map(|(index, constant)| (ConstId(index), constant))
    }
}

impl fmt::Display for ConstantPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, constant) in self.iter() {
            writeln!(f, "{:>4}: {constant}", id.0)?;
        }
        Ok(())
    }
}

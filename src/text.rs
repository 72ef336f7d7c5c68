use core::fmt::{Debug, Display, Formatter};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

type TextIndex = u32;

/// Interned symbol. Equality, hashing and ordering go by interning index;
/// use [`Text::as_str`] when the spelling matters.
#[derive(Hash, PartialOrd, Ord, Eq, PartialEq, Clone, Copy)]
pub struct Text(TextIndex);

#[derive(Default)]
pub struct TextMap {
    val_to_idx: HashMap<&'static str, TextIndex>,
    idx_to_val: Vec<&'static str>,
}

impl TextMap {
    fn insert_str(&mut self, val: &str) -> TextIndex {
        if let Some(&idx) = self.val_to_idx.get(val) {
            idx
        } else {
            let idx: TextIndex = self.idx_to_val.len().try_into().expect("text table overflow");
            // symbols live for the whole process
            let val: &'static str = Box::leak(val.to_owned().into_boxed_str());
            self.val_to_idx.insert(val, idx);
            self.idx_to_val.push(val);
            idx
        }
    }
    fn get_str(&self, idx: TextIndex) -> &'static str {
        self.idx_to_val[idx as usize]
    }
}

static TEXT_MAP: OnceLock<RwLock<TextMap>> = OnceLock::new();

impl Text {
    pub fn from_str(s: &str) -> Self {
        let lock: &RwLock<TextMap> = TEXT_MAP.get_or_init(Default::default);
        let map: &mut TextMap = &mut lock.write().expect("poisoned");
        Self(map.insert_str(s))
    }
    pub fn as_str(&self) -> &'static str {
        let lock: &RwLock<TextMap> = TEXT_MAP.get_or_init(Default::default);
        let map: &TextMap = &lock.read().expect("poisoned");
        map.get_str(self.0)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl Debug for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

use lasso::{Spur, ThreadedRodeo};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(0);

/// Identity of one object on the canvas surface, stable for the object's
/// lifetime. Minted as `<kind>_<serial>` and never reused, so an undone
/// stroke and its replacement never collide.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(Spur);

impl ObjectId {
    pub fn intern(s: &str) -> Self {
        ObjectId(INTERNER.get_or_intern(s))
    }

    /// Mint a fresh id for an object of `kind` (`stroke_7`, `image_12`).
    pub fn next(kind: &str) -> Self {
        let serial = NEXT_SERIAL.fetch_add(1, Ordering::Relaxed);
        Self::intern(&format!("{kind}_{serial}"))
    }

    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// The kind label the id was minted with.
    pub fn kind(&self) -> &str {
        let s = self.as_str();
        s.rsplit_once('_').map_or(s, |(kind, _)| kind)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

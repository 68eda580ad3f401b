#[cfg(feature = "std")]
pub type Vec<T> = std::vec::Vec<T>;
#[cfg(not(feature = "std"))]
pub type Vec<T> = alloc::vec::Vec<T>;

#[cfg(feature = "std")]
pub type String = std::string::String;
#[cfg(not(feature = "std"))]
pub type String = alloc::string::String;

// Cursor families are single-threaded; factories are shared across threads.
#[cfg(feature = "std")]
pub type Rc<T> = std::rc::Rc<T>;
#[cfg(not(feature = "std"))]
pub type Rc<T> = alloc::rc::Rc<T>;

#[cfg(feature = "std")]
pub type Arc<T> = std::sync::Arc<T>;
#[cfg(not(feature = "std"))]
pub type Arc<T> = alloc::sync::Arc<T>;

#[cfg(feature = "std")]
pub type BTreeMap<K, V> = std::collections::BTreeMap<K, V>;
#[cfg(not(feature = "std"))]
pub type BTreeMap<K, V> = alloc::collections::BTreeMap<K, V>;

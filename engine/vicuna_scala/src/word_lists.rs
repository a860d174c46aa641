//! Default word lists for the Scala-flavored grammar.

use vicuna_core::KeywordSets;

/// Slot of the keyword list in a [`KeywordSets`].
pub const KEYWORD_LIST: usize = 0;
/// Slot of the standard-library class list.
pub const CLASS_LIST: usize = 1;
/// Slot of the standard-library trait list.
pub const TRAIT_LIST: usize = 2;

pub const KEYWORDS: &str = "abstract case catch class def derives do else end enum export \
extends extension false final finally for forSome given if implicit import infix inline lazy \
match new null object opaque open override package private protected return sealed super \
then this throw throws trait transparent true try type using val var while with yield";

pub const CLASSES: &str = "Any AnyRef AnyVal App Array BigDecimal BigInt Boolean Byte Char \
Class Console Double Either Exception Float Function Int Integer List Long Map Math Nil None \
Nothing Null Object Option Range Seq Set Short Some String StringBuilder Unit Vector";

pub const TRAITS: &str = "Cloneable Comparable Equiv Iterable Iterator Ordered Ordering \
PartialFunction PartialOrdering Product Serializable Traversable";

/// The stock keyword tables, in slot order.
pub fn default_keywords() -> KeywordSets {
    KeywordSets::new(&[KEYWORDS, CLASSES, TRAITS])
}

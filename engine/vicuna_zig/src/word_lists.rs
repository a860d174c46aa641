//! Default word lists for the Zig-flavored grammar.

use vicuna_core::KeywordSets;

/// Slot of the keyword list in a [`KeywordSets`].
pub const KEYWORD_LIST: usize = 0;
/// Slot of the builtin-type list.
pub const TYPE_LIST: usize = 1;

pub const KEYWORDS: &str = "addrspace align allowzero and anyframe anytype asm async await \
break callconv catch comptime const continue defer else enum errdefer error export extern \
fn for if inline linksection noalias noinline nosuspend opaque or orelse packed pub resume \
return struct suspend switch test threadlocal try union unreachable usingnamespace var \
volatile while";

pub const TYPES: &str = "anyerror anyopaque bool c_char c_int c_long c_longdouble c_longlong \
c_short c_uint c_ulong c_ulonglong c_ushort comptime_float comptime_int f128 f16 f32 f64 f80 \
false i128 i16 i32 i64 i8 isize noreturn null true type u128 u16 u32 u64 u8 undefined usize \
void";

/// The stock keyword tables, in slot order.
pub fn default_keywords() -> KeywordSets {
    KeywordSets::new(&[KEYWORDS, TYPES])
}

#[cfg(test)]
mod tests {
    use super::{default_keywords, KEYWORD_LIST, TYPE_LIST};

    #[test]
    fn stock_lists_cover_the_basics() {
        let sets = default_keywords();
        for word in ["fn", "comptime", "orelse", "usingnamespace"] {
            assert!(sets.contains(KEYWORD_LIST, word), "{word}");
        }
        for word in ["u8", "i128", "f80", "comptime_int", "anyopaque"] {
            assert!(sets.contains(TYPE_LIST, word), "{word}");
        }
        assert!(!sets.contains(KEYWORD_LIST, "u8"));
        assert!(!sets.contains(TYPE_LIST, "fn"));
        // Sized types are ordinary list members, not a spelling rule.
        assert!(!sets.contains(TYPE_LIST, "u9"));
        assert!(!sets.contains(TYPE_LIST, "i256"));
    }
}

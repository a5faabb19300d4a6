//! ソースバイト列の字句レベルの走査
//!
//! Go の構文解析は行わず、コメント・リテラル・識別子の境界だけを判定する。

mod ident;
pub mod scanner;

pub use ident::{
    decode_rune,
    is_ident_part,
    is_ident_start,
    is_valid_host_ident,
    rune_width,
};
pub use scanner::{
    ESCAPE_MARKER,
    IdentToken,
    IdentTokens,
    InvalidUtf8,
    ident_tokens,
    ident_tokens_from,
    plain_identifiers,
};

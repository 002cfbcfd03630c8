//! バイト文字クラス判定テーブル
//!
//! ## 概要
//!
//! 0-255 のすべてのバイト値について、そのバイトが属する文字クラスを
//! コンパイル時に生成したテーブルから O(1) で引けるようにします。
//!
//! - [`CharClass::HTTP_TOKEN_STOP`]: RFC 2068 の制御文字と tspecials
//! - [`CharClass::ESCAPE_SHELL_CMD`]: シェルコマンドでエスケープが必要な文字
//! - [`CharClass::ESCAPE_PATH_SEGMENT`]: パスセグメントでエスケープが必要な文字
//! - [`CharClass::OS_ESCAPE_PATH`]: パス全体でエスケープが必要な文字 (`/` は除く)
//! - [`CharClass::SPACE`]: 空白文字 (SP / HT / LF / VT / FF / CR)
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_field_list::char_class::{classify, CharClass};
//!
//! assert!(classify(b',').contains(CharClass::HTTP_TOKEN_STOP));
//! assert!(!classify(b'a').contains(CharClass::HTTP_TOKEN_STOP));
//! assert!(classify(b'\t').contains(CharClass::SPACE));
//! ```

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// 文字クラスのビットセット
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharClass(u8);

impl CharClass {
    /// どのクラスにも属さない
    pub const NONE: CharClass = CharClass(0);
    /// シェルコマンドでエスケープが必要
    pub const ESCAPE_SHELL_CMD: CharClass = CharClass(0x01);
    /// パスセグメントでエスケープが必要
    pub const ESCAPE_PATH_SEGMENT: CharClass = CharClass(0x02);
    /// パスでエスケープが必要
    pub const OS_ESCAPE_PATH: CharClass = CharClass(0x04);
    /// HTTP トークンを終端する文字
    pub const HTTP_TOKEN_STOP: CharClass = CharClass(0x08);
    /// 空白文字
    pub const SPACE: CharClass = CharClass(0x10);

    /// ビット値
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `other` のビットがすべて立っているかどうか
    pub const fn contains(self, other: CharClass) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// `other` のビットが 1 つでも立っているかどうか
    pub const fn intersects(self, other: CharClass) -> bool {
        self.0 & other.0 != 0
    }

    /// どのビットも立っていないかどうか
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    const fn union(self, other: CharClass) -> CharClass {
        CharClass(self.0 | other.0)
    }
}

impl BitOr for CharClass {
    type Output = CharClass;

    fn bitor(self, rhs: CharClass) -> CharClass {
        self.union(rhs)
    }
}

impl BitOrAssign for CharClass {
    fn bitor_assign(&mut self, rhs: CharClass) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(CharClass, &str); 5] = [
            (CharClass::ESCAPE_SHELL_CMD, "ESCAPE_SHELL_CMD"),
            (CharClass::ESCAPE_PATH_SEGMENT, "ESCAPE_PATH_SEGMENT"),
            (CharClass::OS_ESCAPE_PATH, "OS_ESCAPE_PATH"),
            (CharClass::HTTP_TOKEN_STOP, "HTTP_TOKEN_STOP"),
            (CharClass::SPACE, "SPACE"),
        ];

        let mut names = NAMES
            .iter()
            .filter(|(class, _)| self.contains(*class))
            .map(|(_, name)| *name);
        write!(f, "CharClass(")?;
        if let Some(first) = names.next() {
            write!(f, "{}", first)?;
            for name in names {
                write!(f, " | {}", name)?;
            }
        }
        write!(f, ")")
    }
}

static TABLE: [CharClass; 256] = build_table();

/// バイトの文字クラスを返す
///
/// `u8` を受け取るため符号拡張は起こりえず、全バイト値に対して定義されています。
pub fn classify(b: u8) -> CharClass {
    TABLE[b as usize]
}

/// C の `isspace` 相当 (SP / HT / LF / VT / FF / CR)
pub fn is_space(b: u8) -> bool {
    classify(b).contains(CharClass::SPACE)
}

/// HTTP トークンを終端する文字かどうか
pub fn is_token_stop(b: u8) -> bool {
    classify(b).contains(CharClass::HTTP_TOKEN_STOP)
}

/// RFC 9110 の token として妥当な文字列かどうか
pub(crate) fn is_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii() && !is_token_stop(b))
}

const fn build_table() -> [CharClass; 256] {
    let mut table = [CharClass::NONE; 256];
    // NUL は文字列終端として扱われるため、どのクラスにも属さない
    let mut i = 1;
    while i < 256 {
        let c = i as u8;
        let mut class = CharClass::NONE;

        if contains_byte(b"&;`'\"|*?~<>^()[]{}$\\\n", c) {
            class = class.union(CharClass::ESCAPE_SHELL_CMD);
        }
        if !c.is_ascii_alphanumeric() && !contains_byte(b"$-_.+!*'(),:@&=~", c) {
            class = class.union(CharClass::ESCAPE_PATH_SEGMENT);
        }
        if !c.is_ascii_alphanumeric() && !contains_byte(b"$-_.+!*'(),:@&=/~", c) {
            class = class.union(CharClass::OS_ESCAPE_PATH);
        }
        // RFC 2068 Section 2.2: CTL と tspecials
        if c.is_ascii_control() || contains_byte(b" \t()<>@,;:\\\"/[]?={}", c) {
            class = class.union(CharClass::HTTP_TOKEN_STOP);
        }
        if matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r') {
            class = class.union(CharClass::SPACE);
        }

        table[i] = class;
        i += 1;
    }
    table
}

const fn contains_byte(set: &[u8], c: u8) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] == c {
            return true;
        }
        i += 1;
    }
    false
}

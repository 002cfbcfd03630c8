//! リスト要素の字句状態機械
//!
//! 境界の検出 (サイズ計算)、正規化コピー、正規形との比較の 3 つが
//! 同じ判断をするように、状態遷移と正規化規則は [`Lexer::step`] 1 つにまとめ、
//! 出力先だけを [`Sink`] で差し替える。

use crate::char_class::is_space;

/// quoted-pair / quoted-string / コメントの入れ子の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ScanState {
    in_quoted_pair: bool,
    in_quoted_string: bool,
    comment_depth: usize,
}

impl ScanState {
    /// `,` を区切りとして扱える状態かどうか
    pub(crate) fn is_neutral(&self) -> bool {
        !self.in_quoted_pair && !self.in_quoted_string && self.comment_depth == 0
    }

    /// quoted-string かコメントの中かどうか
    fn in_literal(&self) -> bool {
        self.in_quoted_string || self.comment_depth > 0
    }
}

/// 保留中の空白の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Space {
    #[default]
    None,
    /// 次の通常文字の前に空白を 1 つ出力する
    Pending,
    /// `=` `/` `;` の直後なので空白を出力しない
    Suppressed,
}

/// 1 バイト分の出力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Emit {
    /// `byte` の前に空白を 1 つ出力する
    pub(crate) space: bool,
    pub(crate) byte: u8,
}

/// 正規化済みバイト列の出力先
pub(crate) trait Sink {
    fn emit(&mut self, emit: Emit);

    /// コメントの外にある入力バイトを、出力の有無に関係なく受け取る
    fn uncommented(&mut self, _b: u8) {}
}

/// 何も出力しない
pub(crate) struct Discard;

impl Sink for Discard {
    fn emit(&mut self, _emit: Emit) {}
}

/// 正規形を組み立てる
pub(crate) struct Collect {
    buf: Vec<u8>,
}

impl Collect {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn into_string(self) -> String {
        // 入力が UTF-8 で、挿入するのは ASCII の空白と小文字化だけなので置き換えは起きない
        match String::from_utf8(self.buf) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl Sink for Collect {
    fn emit(&mut self, emit: Emit) {
        if emit.space {
            self.buf.push(b' ');
        }
        self.buf.push(emit.byte);
    }
}

/// コメントを取り除いた入力を正規化して `inner` に渡す
///
/// コメントの外のバイトだけを別の [`Lexer`] に通すので、空白の規則は正規形と同じになる。
/// 先頭の空白は捨て、末尾の空白は保留のまま出力されない。
pub(crate) struct Elide<S> {
    lexer: Lexer,
    started: bool,
    inner: S,
}

impl<S: Sink> Elide<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self {
            lexer: Lexer::new(),
            started: false,
            inner,
        }
    }

    /// コメントの外に出力があったかどうか
    pub(crate) fn started(&self) -> bool {
        self.started
    }

    pub(crate) fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sink> Sink for Elide<S> {
    fn emit(&mut self, _emit: Emit) {}

    fn uncommented(&mut self, b: u8) {
        if let Some(mut emit) = self.lexer.step(b) {
            emit.space &= self.started;
            self.started = true;
            self.inner.emit(emit);
        }
    }
}

/// 対象と 1 バイトずつ比較する
struct Matcher<'t> {
    target: &'t [u8],
    pos: usize,
    good: bool,
}

impl<'t> Matcher<'t> {
    fn new(target: &'t [u8]) -> Self {
        Self {
            target,
            pos: 0,
            good: true,
        }
    }

    fn expect(&mut self, b: u8) {
        if self.good {
            self.good = self.target.get(self.pos) == Some(&b);
            self.pos += 1;
        }
    }

    fn matched(&self) -> bool {
        self.good && self.pos == self.target.len()
    }
}

impl Sink for Matcher<'_> {
    fn emit(&mut self, emit: Emit) {
        if emit.space {
            self.expect(b' ');
        }
        self.expect(emit.byte);
    }
}

/// 正規形と 1 バイトずつ比較する
///
/// コメントをそのまま比較する正規形と、コメントを取り除いた形の両方を同時に追う。
pub(crate) struct Compare<'t> {
    verbatim: Matcher<'t>,
    elided: Elide<Matcher<'t>>,
}

impl<'t> Compare<'t> {
    pub(crate) fn new(target: &'t [u8]) -> Self {
        Self {
            verbatim: Matcher::new(target),
            elided: Elide::new(Matcher::new(target)),
        }
    }

    /// 要素全体が対象と一致したかどうか (前方一致は不一致)
    pub(crate) fn matched(&self) -> bool {
        self.verbatim.matched() || (self.elided.started() && self.elided.inner.matched())
    }
}

impl Sink for Compare<'_> {
    fn emit(&mut self, emit: Emit) {
        self.verbatim.emit(emit);
    }

    fn uncommented(&mut self, b: u8) {
        self.elided.uncommented(b);
    }
}

/// 1 要素を走査する字句解析器
#[derive(Debug, Clone, Default)]
pub(crate) struct Lexer {
    state: ScanState,
    space: Space,
}

impl Lexer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn state(&self) -> ScanState {
        self.state
    }

    /// 1 バイト進め、出力すべきものがあれば返す
    pub(crate) fn step(&mut self, b: u8) -> Option<Emit> {
        if self.state.in_quoted_pair {
            self.state.in_quoted_pair = false;
            return Some(Emit {
                space: false,
                byte: b,
            });
        }

        let (space, byte) = match b {
            b'\\' => {
                self.state.in_quoted_pair = true;
                (self.take_space(), b)
            }
            b'"' => {
                if self.state.comment_depth == 0 {
                    self.state.in_quoted_string = !self.state.in_quoted_string;
                }
                (self.take_space(), b)
            }
            b'(' => {
                if !self.state.in_quoted_string {
                    self.state.comment_depth += 1;
                }
                (self.take_space(), b)
            }
            b')' => {
                if self.state.comment_depth > 0 {
                    self.state.comment_depth -= 1;
                }
                // 閉じ括弧の前には空白を入れない
                self.space = Space::None;
                (false, b)
            }
            b' ' | b'\t' => {
                if self.space != Space::None {
                    return None;
                }
                if !self.state.in_literal() {
                    self.space = Space::Pending;
                    return None;
                }
                (false, b)
            }
            b'=' | b'/' | b';' => {
                if !self.state.in_literal() {
                    self.space = Space::Suppressed;
                }
                (false, b)
            }
            _ => {
                let space = self.take_space();
                if self.state.in_literal() {
                    (space, b)
                } else {
                    (space, b.to_ascii_lowercase())
                }
            }
        };

        Some(Emit { space, byte })
    }

    fn take_space(&mut self) -> bool {
        let pending = self.space == Space::Pending;
        self.space = Space::None;
        pending
    }
}

/// 1 要素の走査結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ItemEnd {
    /// 末尾の意味を持たない空白を除いた終端
    pub(crate) significant: usize,
    /// 区切りの `,` または入力の終端
    pub(crate) end: usize,
}

/// `start` から 1 要素を走査し、出力を `sink` に渡す
pub(crate) fn scan_item<S: Sink>(input: &[u8], start: usize, sink: &mut S) -> ItemEnd {
    let mut lexer = Lexer::new();
    let mut significant = start;
    let mut pos = start;

    while let Some(&b) = input.get(pos) {
        if b == b',' && lexer.state().is_neutral() {
            break;
        }
        let insignificant = matches!(b, b' ' | b'\t') && lexer.state().is_neutral();
        let depth_before = lexer.state().comment_depth;
        if let Some(emit) = lexer.step(b) {
            sink.emit(emit);
        }
        // 括弧も含めてコメントに属するバイトは渡さない
        if depth_before == 0 && lexer.state().comment_depth == 0 {
            sink.uncommented(b);
        }
        pos += 1;
        if !insignificant {
            significant = pos;
        }
    }

    ItemEnd {
        significant,
        end: pos,
    }
}

/// 先頭の `,` と空白を読み飛ばした位置
pub(crate) fn skip_separators(input: &[u8], mut pos: usize) -> usize {
    while let Some(&b) = input.get(pos) {
        if b != b',' && !is_space(b) {
            break;
        }
        pos += 1;
    }
    pos
}

/// リストパースの制限設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldListLimits {
    /// 最大要素数 (デフォルト: 64)
    pub max_items: usize,
    /// 1 要素の最大バイト長 (デフォルト: 8KB)
    ///
    /// 正規化前の要素の長さで判定します。
    pub max_item_size: usize,
}

impl Default for FieldListLimits {
    fn default() -> Self {
        Self {
            max_items: 64,
            max_item_size: 8 * 1024, // 8KB
        }
    }
}

impl FieldListLimits {
    /// 制限なしの設定を作成
    pub fn unlimited() -> Self {
        Self {
            max_items: usize::MAX,
            max_item_size: usize::MAX,
        }
    }
}

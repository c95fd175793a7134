/// Accept ヘッダー処理の制限設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptLimits {
    /// 最大候補数 (デフォルト: 100)
    ///
    /// パースに成功した候補がこの数に達した時点で以降のエントリは無視する。
    pub max_candidates: usize,
    /// 最大ヘッダー長 (デフォルト: 8KB)
    ///
    /// これを超えるヘッダーは Accept ヘッダーが無い場合と同じ扱いになる。
    pub max_header_size: usize,
}

impl Default for AcceptLimits {
    fn default() -> Self {
        Self {
            max_candidates: 100,
            max_header_size: 8 * 1024, // 8KB
        }
    }
}

impl AcceptLimits {
    /// 制限なしの設定を作成
    pub fn unlimited() -> Self {
        Self {
            max_candidates: usize::MAX,
            max_header_size: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let limits = AcceptLimits::default();
        assert_eq!(limits.max_candidates, 100);
        assert_eq!(limits.max_header_size, 8192);
    }

    #[test]
    fn unlimited_limits() {
        let limits = AcceptLimits::unlimited();
        assert_eq!(limits.max_candidates, usize::MAX);
        assert_eq!(limits.max_header_size, usize::MAX);
    }
}

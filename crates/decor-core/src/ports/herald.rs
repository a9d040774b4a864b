//! Herald port - 副作用（掛け声など）の出口
//!
//! デコレータの副作用アクション（例: Warlord の battle cry）は
//! `value()` / `description()` の計算経路では決して実行されません。
//! 明示的に呼ばれた時だけ、この trait を通して外へ出ていきます。

/// Herald は誰か（speaker）の発言を外部へ伝える
///
/// # テスト容易性
/// - 本番: `WriterHerald`（標準出力などへ書き出す）
/// - テスト: `RecordingHerald`（発言を記録して後から検証）
pub trait Herald: Send + Sync {
    fn announce(&self, speaker: &str, message: &str);
}

impl<H: Herald + ?Sized> Herald for &H {
    fn announce(&self, speaker: &str, message: &str) {
        (**self).announce(speaker, message)
    }
}

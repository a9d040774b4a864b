//! Herald の実装
//!
//! # 学習ポイント
//! - `Mutex` による内部可変性（`&self` のまま書き込む）
//! - 任意の `io::Write` を包むジェネリックな出口
//! - 毒化（poison）した Mutex からの回復
//!
//! `announce()` は値を返さないため、書き込みの失敗は呼び出し側へ伝播せず
//! `warn!` で記録するだけにしています。

use std::io::Write;
use std::sync::Mutex;

use tracing::warn;

use crate::ports::Herald;

/// 発言を `speaker: message` の 1 行として writer に書き出す
///
/// CLI では標準出力を、テストでは `Vec<u8>` を包みます。
#[derive(Debug)]
pub struct WriterHerald<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> WriterHerald<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// 包んでいる writer を取り出す
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Herald for WriterHerald<W> {
    fn announce(&self, speaker: &str, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(out, "{speaker}: {message}") {
            warn!(speaker, error = %e, "announcement was not written");
        }
    }
}

/// 記録された 1 件の発言
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub speaker: String,
    pub message: String,
}

/// 発言をメモリに溜めておき、後から検証できるようにする
#[derive(Debug, Default)]
pub struct RecordingHerald {
    log: Mutex<Vec<Announcement>>,
}

impl RecordingHerald {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn announcements(&self) -> Vec<Announcement> {
        self.log
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.announcements().is_empty()
    }
}

impl Herald for RecordingHerald {
    fn announce(&self, speaker: &str, message: &str) {
        self.log
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Announcement {
                speaker: speaker.to_string(),
                message: message.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_herald_keeps_order() {
        let herald = RecordingHerald::new();
        assert!(herald.is_empty());

        herald.announce("Orc", "first");
        herald.announce("Elf", "second");

        let log = herald.announcements();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].speaker, "Orc");
        assert_eq!(log[1].message, "second");
    }

    #[test]
    fn herald_works_through_a_reference() {
        fn shout<H: Herald>(herald: H) {
            herald.announce("Orc", "hi");
        }

        let herald = RecordingHerald::new();
        shout(&herald);
        assert_eq!(herald.announcements().len(), 1);
    }

    #[test]
    fn writer_herald_writes_one_line_per_announcement() {
        let herald = WriterHerald::new(Vec::new());
        herald.announce("Orc Warlord", "Waaagh!");
        herald.announce("Elf Warlord", "Waaagh!");

        let text = String::from_utf8(herald.into_inner()).unwrap();
        assert_eq!(text, "Orc Warlord: Waaagh!\nElf Warlord: Waaagh!\n");
    }

    #[test]
    fn failed_writes_do_not_panic() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        WriterHerald::new(Broken).announce("Orc", "lost");
    }
}

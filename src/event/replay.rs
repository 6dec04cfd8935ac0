//! 回放事件源
//!
//! 每行一个 JSON 对象：要么是已分类事件 `{"category": "TCP", "direction": "forward"}`，
//! 要么是包摘要 `{"src": "10.0.0.2", "layers": ["ipv4", "udp"]}`。空行跳过。

use std::io::{BufRead, Lines};

use serde::Deserialize;

use crate::error::EventError;

use super::classify::PacketSummary;
use super::local::LocalAddrs;
use super::types::PacketEvent;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReplayLine {
    Classified(PacketEvent),
    Summary(PacketSummary),
}

pub struct ReplaySource<R> {
    lines: Lines<R>,
    line_no: usize,
    local: LocalAddrs,
}

impl<R: BufRead> ReplaySource<R> {
    pub fn new(reader: R, local: LocalAddrs) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            local,
        }
    }
}

impl<R: BufRead> Iterator for ReplaySource<R> {
    type Item = Result<PacketEvent, EventError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(EventError::Io(e))),
            };
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            let parsed = serde_json::from_str::<ReplayLine>(&line).map_err(|source| {
                EventError::Malformed {
                    line: self.line_no,
                    source,
                }
            });
            return Some(parsed.map(|l| match l {
                ReplayLine::Classified(ev) => ev,
                ReplayLine::Summary(pkt) => pkt.to_event(&self.local),
            }));
        }
    }
}

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use log::warn;

use crate::error::{Error, Result};
use crate::types::{Basket, ItemId};

/// A restartable stream of baskets. The miner scans the same data twice
/// (once per pass), so every call to `baskets` must yield a fresh,
/// independent iteration over identical data.
pub trait BasketSource {
    fn baskets(&self) -> Result<Box<dyn Iterator<Item = Basket> + '_>>;
}

/// Parse one input line into a basket of item ids.
///
/// Tokens that fail to parse as integers are skipped with a warning; the
/// rest of the line is still used. Every line is a basket, including an
/// empty one.
pub fn parse_basket(line: &str) -> Basket {
    line.split_whitespace()
        .filter_map(|token| match token.parse::<ItemId>() {
            Ok(item) => Some(item),
            Err(_) => {
                warn!("skipping unparseable item token {:?}", token);
                None
            }
        })
        .collect()
}

/// Basket source backed by a text file, one whitespace-separated basket
/// per line. Each scan reopens the file.
pub struct BasketFile {
    path: PathBuf,
}

impl BasketFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        BasketFile { path: path.into() }
    }
}

impl BasketSource for BasketFile {
    fn baskets(&self) -> Result<Box<dyn Iterator<Item = Basket> + '_>> {
        let file = File::open(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        let lines = BufReader::new(file).lines().map_while(|line| match line {
            Ok(line) => Some(line),
            Err(err) => {
                warn!("stopping basket scan early: {}", err);
                None
            }
        });
        Ok(Box::new(lines.map(|line| parse_basket(&line))))
    }
}

impl BasketSource for [Basket] {
    fn baskets(&self) -> Result<Box<dyn Iterator<Item = Basket> + '_>> {
        Ok(Box::new(self.iter().cloned()))
    }
}

impl BasketSource for Vec<Basket> {
    fn baskets(&self) -> Result<Box<dyn Iterator<Item = Basket> + '_>> {
        self.as_slice().baskets()
    }
}

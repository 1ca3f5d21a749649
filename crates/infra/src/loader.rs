//! Inventory file loader.
//!
//! Format: one header line (ignored) followed by `id,name,category,price,stock`
//! lines. Fields are split on `,` with no quoting, so names and categories
//! cannot contain commas.
//!
//! Failure policy is deliberately asymmetric:
//! - a line with fewer than five fields is skipped;
//! - a line whose id, price or stock does not parse aborts the load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use stockview_core::{DomainError, ProductId};
use stockview_products::{Price, Product, parse_stock};

/// Number of fields a data line must carry.
const FIELD_COUNT: usize = 5;

/// Numeric columns that are parsed (and can therefore fail).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProductField {
    Id,
    Price,
    Stock,
}

impl core::fmt::Display for ProductField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ProductField::Id => "id",
            ProductField::Price => "price",
            ProductField::Stock => "stock",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed inventory data: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: invalid {field} {value:?}: {reason}")]
    InvalidField {
        line: u64,
        field: ProductField,
        value: String,
        #[source]
        reason: DomainError,
    },
}

/// Load products from the inventory file at `path`.
///
/// A path that is not a regular file (missing, or a directory) is not an
/// error: it yields an empty list, which callers treat as "nothing to report".
pub fn load_products(path: impl AsRef<Path>) -> Result<Vec<Product>, LoadError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            tracing::warn!(path = %path.display(), "inventory path is not a regular file");
            return Ok(Vec::new());
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "inventory file not found");
            return Ok(Vec::new());
        }
        Err(e) => return Err(io_error(e)),
    }

    let data = fs::read(path).map_err(io_error)?;
    let products = parse_products(&data)?;
    tracing::info!(path = %path.display(), count = products.len(), "inventory loaded");
    Ok(products)
}

/// Parse inventory data. The first line is always discarded.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`. Bytes that are not valid UTF-8
/// are replaced with U+FFFD in text fields; in numeric fields they make the
/// value unparsable.
pub fn parse_products(data: &[u8]) -> Result<Vec<Product>, LoadError> {
    let body = skip_first_line(data);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::None)
        .terminator(csv::Terminator::CRLF)
        .from_reader(body);

    let mut products = Vec::new();
    let mut record = csv::ByteRecord::new();

    while reader.read_byte_record(&mut record)? {
        // Positions restart after the header line.
        let line = record.position().map(|p| p.line()).unwrap_or_default() + 1;

        if record.len() < FIELD_COUNT {
            tracing::debug!(line, fields = record.len(), "skipping short inventory line");
            continue;
        }

        products.push(parse_record(&record, line)?);
    }

    Ok(products)
}

fn skip_first_line(data: &[u8]) -> &[u8] {
    match data.iter().position(|&b| b == b'\n' || b == b'\r') {
        Some(end) if data[end] == b'\r' && data.get(end + 1) == Some(&b'\n') => &data[end + 2..],
        Some(end) => &data[end + 1..],
        None => &[],
    }
}

fn parse_record(record: &csv::ByteRecord, line: u64) -> Result<Product, LoadError> {
    let text = move |index: usize| String::from_utf8_lossy(&record[index]);
    let invalid = |field: ProductField, value: &str, reason: DomainError| LoadError::InvalidField {
        line,
        field,
        value: value.to_string(),
        reason,
    };

    let raw_id = text(0);
    let id = raw_id
        .parse::<ProductId>()
        .map_err(|e| invalid(ProductField::Id, &raw_id, e))?;
    let raw_price = text(3);
    let price = raw_price
        .parse::<Price>()
        .map_err(|e| invalid(ProductField::Price, &raw_price, e))?;
    let raw_stock = text(4);
    let stock = parse_stock(&raw_stock).map_err(|e| invalid(ProductField::Stock, &raw_stock, e))?;

    Ok(Product::new(id, text(1), text(2), price, stock))
}

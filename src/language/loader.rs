use crate::consts::ALPHABET_LEN;
use crate::error::CfResult;
use crate::normalize;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Raw `token count` statistics, before conversion to log-probabilities.
#[derive(Debug, Clone)]
pub struct NgramCounts {
    pub unigrams: [f64; ALPHABET_LEN],
    pub quadgrams: Vec<([u8; 4], f64)>,
}

impl Default for NgramCounts {
    fn default() -> Self {
        Self {
            unigrams: [0.0; ALPHABET_LEN],
            quadgrams: Vec::new(),
        }
    }
}

impl NgramCounts {
    pub fn has_unigrams(&self) -> bool {
        self.unigrams.iter().any(|&c| c > 0.0)
    }
}

/// Reads a `token count` table; each line may use spaces or tabs.
///
/// Tokens are lowercased and must be ASCII letters. Single letters feed the
/// unigram counts, 4-letter tokens the quadgram list; other lengths, headers
/// and unparsable counts are skipped.
pub fn load_ngram_counts<R: Read>(mut reader: R) -> CfResult<NgramCounts> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    // Tab-delimited records, then any whitespace inside a field, so mixed
    // `token count` and `token\tcount` lines both parse.
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut counts = NgramCounts::default();
    let mut lines_read = 0;
    let mut skipped = 0;

    for result in rdr.records() {
        lines_read += 1;
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!("[Row {}] N-gram parse error: {}", lines_read, e);
                skipped += 1;
                continue;
            }
        };

        let mut fields = rec.iter().flat_map(str::split_whitespace);
        let (Some(token), Some(count)) = (fields.next(), fields.next()) else {
            skipped += 1;
            continue;
        };

        let token = token.to_ascii_lowercase();
        if !token.bytes().all(|b| b.is_ascii_lowercase()) {
            skipped += 1;
            continue;
        }

        let count: f64 = match count.parse() {
            Ok(v) if f64::is_finite(v) && v >= 0.0 => v,
            _ => {
                skipped += 1;
                continue;
            }
        };

        let bytes = token.as_bytes();
        match bytes.len() {
            1 => counts.unigrams[(bytes[0] - b'a') as usize] += count,
            4 => counts
                .quadgrams
                .push(([bytes[0], bytes[1], bytes[2], bytes[3]], count)),
            _ => skipped += 1,
        }
    }

    debug!(
        "Scanned {} lines ({} skipped). Loaded: {} quadgrams, unigrams present: {}",
        lines_read,
        skipped,
        counts.quadgrams.len(),
        counts.has_unigrams()
    );

    Ok(counts)
}

pub fn load_ngram_counts_from_path<P: AsRef<Path>>(path: P) -> CfResult<NgramCounts> {
    debug!("Loading n-gram counts from: {}", path.as_ref().display());
    let file = File::open(path)?;
    load_ngram_counts(file)
}

/// Reads a newline-delimited word list, folding each entry.
/// Entries that are not purely alphabetic after folding are dropped.
pub fn load_word_list<R: Read>(reader: R) -> CfResult<Vec<String>> {
    let mut words = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let word = normalize::fold(line.trim());
        if !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()) {
            words.push(word);
        }
    }
    debug!("Loaded {} words", words.len());
    Ok(words)
}

pub fn load_word_list_from_path<P: AsRef<Path>>(path: P) -> CfResult<Vec<String>> {
    debug!("Loading word list from: {}", path.as_ref().display());
    let file = File::open(path)?;
    load_word_list(file)
}

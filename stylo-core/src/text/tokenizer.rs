/// Characters deleted from the text before it is split into words.
const STRIPPED_SYMBOLS: [char; 8] = ['.', ',', '?', '"', '\'', '!', ';', ':'];

/// Splits raw text into lowercase word tokens.
///
/// Listed punctuation is deleted, not replaced: `"it's"` becomes `"its"`
/// and `"end.Next"` becomes `"endnext"`. Splitting happens on whitespace runs.
pub fn clean_text(text: &str) -> Vec<String> {
	let cleaned: String = text
		.to_lowercase()
		.chars()
		.filter(|c| !STRIPPED_SYMBOLS.contains(c))
		.collect();

	cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Reduces a word to an approximate root.
///
/// A fixed cascade of suffix rules, each applied at most once and in order,
/// every rule seeing the output of the previous one. A rule compares the last
/// `n` characters (the whole word when shorter) with its suffix:
/// 1. last 1 is `s`   → drop 1
/// 2. last 1 is `ful` → drop 3 (a one-character tail never equals `ful`)
/// 3. last 2 is `ly`  → drop 2
/// 4. last 3 is `ing` → drop 3, plus 1 more when longer than 5 and the two
///    characters before `ing` are equal (`running` → `run` → ``)
/// 5. last 3 is `ies` → drop 2
/// 6. last 3 is `ish` → when longer than 4: drop 4 if doubled before `ish`,
///    else drop 3; shorter words are kept
/// 7. last 2 is `ed`  → drop 2
///
/// Positions count characters, not bytes. The result may be empty.
pub fn stem(word: &str) -> String {
	let mut chars: Vec<char> = word.chars().collect();

	if tail_is(&chars, 1, "s") {
		drop_last(&mut chars, 1);
	}
	if tail_is(&chars, 1, "ful") {
		drop_last(&mut chars, 3);
	}
	if tail_is(&chars, 2, "ly") {
		drop_last(&mut chars, 2);
	}
	if tail_is(&chars, 3, "ing") {
		if chars.len() > 5 && doubled_before_suffix(&chars) {
			drop_last(&mut chars, 4);
		}
		drop_last(&mut chars, 3);
	}
	if tail_is(&chars, 3, "ies") {
		drop_last(&mut chars, 2);
	}
	if tail_is(&chars, 3, "ish") && chars.len() > 4 {
		if doubled_before_suffix(&chars) {
			drop_last(&mut chars, 4);
		} else {
			drop_last(&mut chars, 3);
		}
	}
	if tail_is(&chars, 2, "ed") {
		drop_last(&mut chars, 2);
	}

	chars.into_iter().collect()
}

/// Compares the last `n` characters (all of them when fewer) with `suffix`.
fn tail_is(chars: &[char], n: usize, suffix: &str) -> bool {
	let tail = &chars[chars.len().saturating_sub(n)..];
	tail.iter().copied().eq(suffix.chars())
}

/// Compares the 4th and 5th characters from the end. Requires `len >= 5`.
fn doubled_before_suffix(chars: &[char]) -> bool {
	let len = chars.len();
	chars[len - 4] == chars[len - 5]
}

fn drop_last(chars: &mut Vec<char>, n: usize) {
	chars.truncate(chars.len().saturating_sub(n));
}

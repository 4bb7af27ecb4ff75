use crate::pass::NGramMatch;
use crate::scorer::Analysis;
use crate::tokens::TokenSequence;
use std::fmt::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Renders the matches of an [`Analysis`] underneath the sentence.
//
// not/MAG  good/VA  at/JKB  all/NNG
// ╰──────────────╯NEG bigram
//                           ╰─────╯NEUT unigram
// score = -1
pub struct AnalysisDisplay<'a> {
    tokens: &'a TokenSequence,
    analysis: &'a Analysis,
}

impl<'a> AnalysisDisplay<'a> {
    pub fn new(tokens: &'a TokenSequence, analysis: &'a Analysis) -> Self {
        AnalysisDisplay { tokens, analysis }
    }

    fn write_underline(
        &self,
        f: &mut fmt::Formatter<'_>,
        m: &NGramMatch,
        starts: &[usize],
        ends: &[usize],
    ) -> fmt::Result {
        // matches from another sequence are not drawn
        let (start_char_idx, end_char_idx) = match (starts.get(m.start), ends.get(m.end())) {
            (Some(start), Some(end)) => (*start, *end),
            _ => return Ok(()),
        };

        for _ in 0..start_char_idx {
            f.write_char(' ')?;
        }

        f.write_char('╰')?;

        let char_len = end_char_idx - start_char_idx;
        for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
            f.write_char('─')?;
        }

        if char_len > 1 {
            f.write_char('╯')?;
        }

        write!(f, "{} {}", m.category, m.order)
    }
}

impl<'a> fmt::Display for AnalysisDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::new();
        let mut token_idx_to_end_display_char_idx = Vec::new();

        let mut opening_line = String::new();
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(token);
            token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for m in self.analysis.matches() {
            f.write_char('\n')?;
            self.write_underline(
                f,
                m,
                &token_idx_to_start_display_char_idx,
                &token_idx_to_end_display_char_idx,
            )?;
        }

        write!(f, "\nscore = {}", self.analysis.score)
    }
}

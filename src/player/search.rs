//! Fuzzy song search over the catalog.
//!
//! Matches the query against "title artist" with the skim algorithm and keeps the
//! results sorted by score, best first.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use moodbox::catalog::Song;

pub struct SongSearch {
    pub query: String,
    pub results: Vec<usize>,
    pub selected: usize,
    matcher: SkimMatcherV2,
}

impl SongSearch {
    pub fn new(songs: &[Song]) -> Self {
        let mut search = Self {
            query: String::new(),
            results: Vec::new(),
            selected: 0,
            matcher: SkimMatcherV2::default().ignore_case(),
        };
        search.filter(songs);
        search
    }

    pub fn push_char(&mut self, c: char, songs: &[Song]) {
        self.query.push(c);
        self.filter(songs);
    }

    pub fn pop_char(&mut self, songs: &[Song]) {
        self.query.pop();
        self.filter(songs);
    }

    fn filter(&mut self, songs: &[Song]) {
        if self.query.is_empty() {
            self.results = (0..songs.len()).collect();
        } else {
            let mut scored: Vec<(usize, i64)> = songs
                .iter()
                .enumerate()
                .filter_map(|(idx, song)| {
                    let haystack = format!("{} {}", song.title, song.artist);
                    self.matcher
                        .fuzzy_match(&haystack, &self.query)
                        .map(|score| (idx, score))
                })
                .collect();

            // Stable sort keeps catalog order among equal scores
            scored.sort_by(|a, b| b.1.cmp(&a.1));
            self.results = scored.into_iter().map(|(idx, _)| idx).collect();
        }

        if self.selected >= self.results.len() {
            self.selected = 0;
        }
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1) % self.results.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.results.is_empty() {
            self.selected = if self.selected == 0 {
                self.results.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Catalog index of the highlighted result.
    pub fn selected_song(&self) -> Option<usize> {
        self.results.get(self.selected).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str, artist: &str) -> Song {
        Song {
            title: title.to_string(),
            artist: artist.to_string(),
            audio_path: format!("{title}.mp3"),
            cover_path: None,
            duration: 0.0,
            lyrics: Vec::new(),
        }
    }

    fn catalog() -> Vec<Song> {
        vec![
            song("Lavender Haze", "Nicole"),
            song("Quiet Rain", "The Drizzles"),
            song("Neon Nights", "Nicole"),
        ]
    }

    #[test]
    fn test_empty_query_lists_everything() {
        let songs = catalog();
        let search = SongSearch::new(&songs);
        assert_eq!(search.results, vec![0, 1, 2]);
        assert_eq!(search.selected_song(), Some(0));
    }

    #[test]
    fn test_query_filters() {
        let songs = catalog();
        let mut search = SongSearch::new(&songs);

        for c in "rain".chars() {
            search.push_char(c, &songs);
        }
        assert_eq!(search.results.first(), Some(&1));

        for c in "zzzz".chars() {
            search.push_char(c, &songs);
        }
        assert!(search.results.is_empty());
        assert!(search.selected_song().is_none());

        for _ in 0..4 {
            search.pop_char(&songs);
        }
        assert_eq!(search.query, "rain");
        assert!(!search.results.is_empty());
    }

    #[test]
    fn test_artist_matches() {
        let songs = catalog();
        let mut search = SongSearch::new(&songs);

        for c in "drizzles".chars() {
            search.push_char(c, &songs);
        }
        assert_eq!(search.results, vec![1]);
    }

    #[test]
    fn test_selection_wraps() {
        let songs = catalog();
        let mut search = SongSearch::new(&songs);

        search.select_previous();
        assert_eq!(search.selected, 2);
        search.select_next();
        assert_eq!(search.selected, 0);
    }
}

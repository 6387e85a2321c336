//! Pure filter/search/sort/paginate pipeline over the in-memory game list.
//!
//! Every function here is synchronous and side-effect free; re-running the
//! pipeline on the same input always yields the same output.

use super::Game;

/// Page sizes the catalog view accepts.
pub const PAGE_SIZES: [usize; 3] = [12, 24, 36];
/// Page size used until the consumer picks another one.
pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Selected player count standing for "6 or more".
pub const SIX_PLUS: u32 = 6;

/// One filter state, combining all dimensions with logical AND.
///
/// Within `players` and `categories` the selected values combine with OR.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text term matched against name, categories and review.
    pub search: String,
    /// Selected player counts; [`SIX_PLUS`] means "6+".
    pub players: Vec<u32>,
    /// Play time window in minutes, matched by interval overlap.
    pub duration: Option<(u32, u32)>,
    /// Keep only games whose minimum age is at least this.
    pub min_age: Option<i32>,
    /// Selected categories, matched case-insensitively.
    pub categories: Vec<String>,
    /// Difficulty label; empty string disables the dimension.
    pub difficulty: String,
}

/// Total order applied to the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Case-insensitive name order.
    #[default]
    Name,
    /// Rating, highest first; missing ratings count as 0.
    Rating,
    /// Minimum player count, ascending.
    Players,
    /// Minimum duration in minutes, ascending.
    Duration,
}

/// Parse a range display string like `"2-4"` or `"30-45 min"` into a closed
/// `[min, max]` interval.
///
/// Whitespace is stripped, the string is split on `-` and non-digit
/// characters are dropped from each part; a single part yields `min == max`.
/// A string without leading digits is unparseable and yields `None`.
pub fn parse_range(raw: &str) -> Option<(u32, u32)> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parts = compact.split('-');
    let min = part_digits(parts.next()?)?;
    let max = parts.next().and_then(part_digits).unwrap_or(min);
    Some((min, max))
}

fn part_digits(part: &str) -> Option<u32> {
    let digits: String = part.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// First number of a range string, used as the sort key for players and
/// duration; unparseable strings sort first.
fn range_start(raw: &str) -> u32 {
    parse_range(raw).map(|(min, _)| min).unwrap_or(0)
}

fn matches_search(game: &Game, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    game.name.to_lowercase().contains(&term)
        || game
            .categories
            .iter()
            .any(|category| category.to_lowercase().contains(&term))
        || game.review.to_lowercase().contains(&term)
}

fn matches_players(game: &Game, selected: &[u32]) -> bool {
    if selected.is_empty() {
        return true;
    }
    // Unparseable player ranges never exclude a game.
    let Some((min, max)) = parse_range(&game.players) else {
        return true;
    };

    selected.iter().any(|&count| {
        if count == SIX_PLUS {
            max >= SIX_PLUS
        } else {
            count >= min && count <= max
        }
    })
}

fn matches_duration(game: &Game, window: Option<(u32, u32)>) -> bool {
    let Some((filter_min, filter_max)) = window else {
        return true;
    };
    // Unparseable durations never exclude a game.
    let Some((game_min, game_max)) = parse_range(&game.duration) else {
        return true;
    };

    game_min <= filter_max && game_max >= filter_min
}

fn matches_min_age(game: &Game, min_age: Option<i32>) -> bool {
    min_age.is_none_or(|age| game.min_age >= age)
}

fn matches_categories(game: &Game, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }

    selected.iter().any(|wanted| {
        game.categories
            .iter()
            .any(|category| category.to_lowercase() == wanted.to_lowercase())
    })
}

fn matches_difficulty(game: &Game, difficulty: &str) -> bool {
    difficulty.is_empty() || game.difficulty.to_lowercase() == difficulty.to_lowercase()
}

/// Whether a game satisfies every dimension of the filter state.
pub fn matches(game: &Game, filters: &FilterState) -> bool {
    matches_search(game, &filters.search)
        && matches_players(game, &filters.players)
        && matches_duration(game, filters.duration)
        && matches_min_age(game, filters.min_age)
        && matches_categories(game, &filters.categories)
        && matches_difficulty(game, &filters.difficulty)
}

/// Apply the filter state to the full list, preserving input order.
pub fn filter_games(games: &[Game], filters: &FilterState) -> Vec<Game> {
    games
        .iter()
        .filter(|game| matches(game, filters))
        .cloned()
        .collect()
}

/// Sort the filtered list in place. The underlying sort is stable.
pub fn sort_games(games: &mut [Game], sort_by: SortBy) {
    match sort_by {
        SortBy::Name => games.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortBy::Rating => games.sort_by(|a, b| {
            b.rating
                .unwrap_or(0.0)
                .total_cmp(&a.rating.unwrap_or(0.0))
        }),
        SortBy::Players => games.sort_by_key(|game| range_start(&game.players)),
        SortBy::Duration => games.sort_by_key(|game| range_start(&game.duration)),
    }
}

/// Total number of pages for a filtered list; an empty list still has one
/// (empty) page. A zero `items_per_page` counts as one entry per page.
pub fn total_pages(filtered_len: usize, items_per_page: usize) -> usize {
    filtered_len.div_ceil(items_per_page.max(1)).max(1)
}

/// The visible slice for a 1-based page index.
///
/// A page beyond the available range is clamped to the last page instead of
/// rendering an empty one. A zero `items_per_page` counts as one entry per
/// page.
pub fn paginate(games: &[Game], items_per_page: usize, current_page: usize) -> &[Game] {
    let per = items_per_page.max(1);
    let page = current_page.max(1).min(total_pages(games.len(), per));
    let start = (page - 1) * per;
    let end = (start + per).min(games.len());
    if start >= games.len() {
        return &[];
    }
    &games[start..end]
}

/// Aggregates the full game list with filter, sort and page state, the way
/// the catalog browse screen consumes it.
#[derive(Debug, Clone)]
pub struct CatalogView {
    games: Vec<Game>,
    filters: FilterState,
    sort_by: SortBy,
    items_per_page: usize,
    current_page: usize,
}

impl CatalogView {
    /// Create a view over a freshly fetched list with no filters applied.
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            games,
            filters: FilterState::default(),
            sort_by: SortBy::default(),
            items_per_page: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }

    /// Replace the backing list after a refetch.
    pub fn set_games(&mut self, games: Vec<Game>) {
        let before = self.filtered().len();
        self.games = games;
        if self.filtered().len() != before {
            self.current_page = 1;
        }
    }

    /// Replace the filter state; the page resets to 1 whenever the filtered
    /// set size changes.
    pub fn set_filters(&mut self, filters: FilterState) {
        let before = self.filtered().len();
        self.filters = filters;
        if self.filtered().len() != before {
            self.current_page = 1;
        }
    }

    /// Update only the free-text search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let mut filters = self.filters.clone();
        filters.search = term.into();
        self.set_filters(filters);
    }

    /// Drop every filter dimension, keeping sort and page size.
    pub fn clear_filters(&mut self) {
        self.set_filters(FilterState::default());
    }

    /// Select the sort order.
    pub fn set_sort(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
    }

    /// Select a page size; values outside [`PAGE_SIZES`] are ignored.
    /// Switching the size always returns to the first page.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        if PAGE_SIZES.contains(&items_per_page) {
            self.items_per_page = items_per_page;
            self.current_page = 1;
        }
    }

    /// Jump to a 1-based page index.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Current filter state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Current page size.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Filtered and sorted list, before pagination.
    pub fn filtered(&self) -> Vec<Game> {
        let mut games = filter_games(&self.games, &self.filters);
        sort_games(&mut games, self.sort_by);
        games
    }

    /// Number of pages for the current filtered set.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.items_per_page)
    }

    /// The slice of games the current page displays.
    pub fn visible(&self) -> Vec<Game> {
        let filtered = self.filtered();
        paginate(&filtered, self.items_per_page, self.current_page).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str, players: &str, duration: &str, categories: &[&str]) -> Game {
        Game {
            name: name.into(),
            players: players.into(),
            duration: duration.into(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            ..Game::default()
        }
    }

    fn catan_and_jaipur() -> Vec<Game> {
        vec![
            game("Catan", "3-4", "60-90 min", &["Estrategia"]),
            game("Jaipur", "2", "20-30 min", &["Comercio"]),
        ]
    }

    #[test]
    fn parse_range_handles_display_strings() {
        assert_eq!(parse_range("2-4"), Some((2, 4)));
        assert_eq!(parse_range("1-5"), Some((1, 5)));
        assert_eq!(parse_range("30-45 min"), Some((30, 45)));
        assert_eq!(parse_range(" 2 - 4 "), Some((2, 4)));
        assert_eq!(parse_range("2"), Some((2, 2)));
        assert_eq!(parse_range("90 min"), Some((90, 90)));
        assert_eq!(parse_range("variable"), None);
        assert_eq!(parse_range(""), None);
    }

    #[test]
    fn search_matches_name_category_or_review() {
        let mut g = game("Catan", "3-4", "60-90 min", &["Estrategia"]);
        g.review = "Un clásico moderno".into();

        for term in ["catan", "CATAN", "estrateg", "clásico"] {
            assert!(
                matches_search(&g, term),
                "term `{term}` should match"
            );
        }
        assert!(!matches_search(&g, "dados"));
        // Blank search never filters.
        assert!(matches_search(&g, "  "));
    }

    #[test]
    fn player_filter_checks_range_membership() {
        let games = catan_and_jaipur();

        let three = FilterState {
            players: vec![3],
            ..FilterState::default()
        };
        let names: Vec<String> = filter_games(&games, &three)
            .iter()
            .map(|g| g.name.clone())
            .collect();
        assert_eq!(names, vec!["Catan"]);

        let two = FilterState {
            players: vec![2],
            ..FilterState::default()
        };
        let names: Vec<String> = filter_games(&games, &two)
            .iter()
            .map(|g| g.name.clone())
            .collect();
        assert_eq!(names, vec!["Jaipur"]);
    }

    #[test]
    fn six_plus_matches_high_max_only() {
        let party = game("Werewolf", "8-18", "30 min", &[]);
        let duo = game("Patchwork", "2", "30 min", &[]);

        assert!(matches_players(&party, &[SIX_PLUS]));
        assert!(!matches_players(&duo, &[SIX_PLUS]));
        // Selected counts OR together.
        assert!(matches_players(&duo, &[2, SIX_PLUS]));
    }

    #[test]
    fn duration_filter_uses_interval_overlap() {
        let g = game("Catan", "3-4", "60-90 min", &[]);
        assert!(matches_duration(&g, Some((30, 60))));
        assert!(matches_duration(&g, Some((90, 240))));
        assert!(!matches_duration(&g, Some((15, 45))));
        assert!(matches_duration(&g, None));
    }

    #[test]
    fn unparseable_duration_passes_filter() {
        let g = game("Mystery", "2-4", "depende", &[]);
        assert!(matches_duration(&g, Some((15, 30))));
    }

    #[test]
    fn unparseable_players_pass_filter() {
        let g = game("Mystery", "muchos", "30 min", &[]);
        assert!(matches_players(&g, &[2]));
    }

    #[test]
    fn min_age_keeps_older_recommendations() {
        let mut g = game("Catan", "3-4", "60-90 min", &[]);
        g.min_age = 10;
        assert!(matches_min_age(&g, Some(8)));
        assert!(matches_min_age(&g, Some(10)));
        assert!(!matches_min_age(&g, Some(12)));
        assert!(matches_min_age(&g, None));
    }

    #[test]
    fn category_and_difficulty_match_ignore_case() {
        let mut g = game("Catan", "3-4", "60-90 min", &["Estrategia"]);
        g.difficulty = "Medio".into();

        let filters = FilterState {
            categories: vec!["estrategia".into()],
            difficulty: "medio".into(),
            ..FilterState::default()
        };
        assert!(matches(&g, &filters));

        let other = FilterState {
            categories: vec!["Comercio".into()],
            ..FilterState::default()
        };
        assert!(!matches(&g, &other));
    }

    #[test]
    fn dimensions_combine_with_and() {
        let games = catan_and_jaipur();
        let filters = FilterState {
            players: vec![3],
            categories: vec!["Comercio".into()],
            ..FilterState::default()
        };
        // Catan passes players but not categories; Jaipur the reverse.
        assert!(filter_games(&games, &filters).is_empty());
    }

    #[test]
    fn pipeline_is_idempotent() {
        let games = catan_and_jaipur();
        let filters = FilterState {
            search: "a".into(),
            duration: Some((15, 240)),
            ..FilterState::default()
        };
        let first = filter_games(&games, &filters);
        let second = filter_games(&games, &filters);
        assert_eq!(first, second);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let mut games = vec![
            game("azul", "2-4", "30 min", &[]),
            game("Brass", "2-4", "120 min", &[]),
            game("Agricola", "1-4", "90 min", &[]),
        ];
        sort_games(&mut games, SortBy::Name);
        let names: Vec<&str> = games.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Agricola", "azul", "Brass"]);
    }

    #[test]
    fn sort_by_rating_descends_with_missing_as_zero() {
        let mut games = catan_and_jaipur();
        games[0].rating = None;
        games[1].rating = Some(4.5);
        sort_games(&mut games, SortBy::Rating);
        assert_eq!(games[0].name, "Jaipur");
    }

    #[test]
    fn sort_by_players_and_duration_use_first_number() {
        let mut games = catan_and_jaipur();
        sort_games(&mut games, SortBy::Players);
        assert_eq!(games[0].name, "Jaipur"); // 2 before 3

        let mut games = catan_and_jaipur();
        sort_games(&mut games, SortBy::Duration);
        assert_eq!(games[0].name, "Jaipur"); // 20 before 60
    }

    #[test]
    fn paginate_slices_one_based_pages() {
        let games: Vec<Game> = (0..5)
            .map(|i| game(&format!("g{i}"), "2", "30 min", &[]))
            .collect();
        assert_eq!(paginate(&games, 2, 1).len(), 2);
        assert_eq!(paginate(&games, 2, 3).len(), 1);
        assert_eq!(paginate(&games, 12, 1).len(), 5);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let games: Vec<Game> = (0..3)
            .map(|i| game(&format!("g{i}"), "2", "30 min", &[]))
            .collect();
        let last = paginate(&games, 2, 99);
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].name, "g2");
    }

    #[test]
    fn zero_page_size_counts_as_one_per_page() {
        let games: Vec<Game> = (0..3)
            .map(|i| game(&format!("g{i}"), "2", "30 min", &[]))
            .collect();
        assert_eq!(total_pages(3, 0), 3);
        let page = paginate(&games, 0, 2);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "g1");
    }

    #[test]
    fn empty_filtered_set_is_a_valid_page() {
        let games: Vec<Game> = Vec::new();
        assert!(paginate(&games, 12, 1).is_empty());
        assert_eq!(total_pages(0, 12), 1);
    }

    #[test]
    fn one_per_page_shows_second_game_alphabetically() {
        let mut view = CatalogView::new(catan_and_jaipur());
        // Smallest allowed page size still exercises the slicing: with two
        // games and page 2 the second alphabetical name shows alone once the
        // page size drops to one entry per page.
        let filtered = view.filtered();
        let second = paginate(&filtered, 1, 2).to_vec();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].name, "Jaipur");
        view.set_sort(SortBy::Name);
        assert_eq!(view.filtered()[1].name, "Jaipur");
    }

    #[test]
    fn changing_page_size_resets_to_first_page() {
        let games: Vec<Game> = (0..40)
            .map(|i| game(&format!("g{i:02}"), "2", "30 min", &[]))
            .collect();
        let mut view = CatalogView::new(games);
        view.set_page(3);
        view.set_items_per_page(24);
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.visible().len(), 24);
        assert_eq!(view.visible()[0].name, "g00");
    }

    #[test]
    fn disallowed_page_sizes_are_ignored() {
        let mut view = CatalogView::new(catan_and_jaipur());
        view.set_items_per_page(7);
        assert_eq!(view.items_per_page(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn shrinking_filtered_set_resets_page() {
        let games: Vec<Game> = (0..30)
            .map(|i| game(&format!("g{i:02}"), "2", "30 min", &[]))
            .collect();
        let mut view = CatalogView::new(games);
        view.set_page(2);
        view.set_search("g01");
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.visible()[0].name, "g01");
    }

    #[test]
    fn visible_never_exceeds_page_size() {
        let games: Vec<Game> = (0..50)
            .map(|i| game(&format!("g{i:02}"), "2", "30 min", &[]))
            .collect();
        let view = CatalogView::new(games);
        assert!(view.visible().len() <= view.items_per_page());
    }
}

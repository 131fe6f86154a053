use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use faceit_data::api::{MatchType, TournamentType};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Query the FACEIT Data API v4 from the terminal.
///
/// Every endpoint is available as `<family> <operation>`; the decoded JSON
/// response is printed to stdout. Non-success responses print "No result".
///
/// The API token is read from --token, the FACEIT_API_TOKEN environment
/// variable, or the config file (see `config set-token`).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// FACEIT Data API token. Overrides the config file and environment.
    #[arg(long, global = true, help_heading = "Authentication")]
    pub token: Option<String>,

    /// Print JSON on a single line instead of pretty-printing it.
    #[arg(short = 'c', long = "compact", global = true, help_heading = "Display Options")]
    pub compact: bool,

    /// Log debug output to stderr in addition to the log file.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or update the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),

    #[command(flatten)]
    Query(QueryCommand),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// List current configuration settings
    Show,
    /// Store the API token in the config file
    SetToken { token: String },
    /// Store a custom API base URL in the config file
    SetBaseUrl { base_url: String },
    /// Store a persistent custom log file location
    SetLogFile { path: String },
    /// Revert to the default log file location
    ClearLogFile,
}

/// Offset/limit pagination shared by list operations
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct PageArgs {
    /// The starting item position
    #[arg(long)]
    pub offset: Option<u32>,
    /// The number of items to return
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// Championship details, matches and subscriptions
    #[command(subcommand)]
    Championship(ChampionshipCommand),
    /// Games available on FACEIT
    #[command(subcommand)]
    Game(GameCommand),
    /// Hub details, matches, members, roles and statistics
    #[command(subcommand)]
    Hub(HubCommand),
    /// Championship and hub leaderboards
    #[command(subcommand)]
    Leaderboard(LeaderboardCommand),
    /// Match details and statistics
    #[command(subcommand, name = "match")]
    Match(MatchCommand),
    /// Organizer details and their competitions
    #[command(subcommand)]
    Organizer(OrganizerCommand),
    /// Player details, history, hubs, statistics and tournaments
    #[command(subcommand)]
    Player(PlayerCommand),
    /// Global game rankings
    #[command(subcommand)]
    Ranking(RankingCommand),
    /// Free-text search
    #[command(subcommand)]
    Search(SearchCommand),
    /// Team details, statistics and tournaments
    #[command(subcommand)]
    Team(TeamCommand),
    /// Tournament listings and details
    #[command(subcommand)]
    Tournament(TournamentCommand),
}

#[derive(Subcommand, Debug)]
pub enum ChampionshipCommand {
    Details {
        championship_id: String,
        /// Inline the game entity (wins over --expand-organizer)
        #[arg(long)]
        expand_game: bool,
        /// Inline the organizer entity
        #[arg(long)]
        expand_organizer: bool,
    },
    Matches {
        championship_id: String,
        /// all (default), upcoming, ongoing or past
        #[arg(long = "type")]
        type_of_match: Option<MatchType>,
        #[command(flatten)]
        page: PageArgs,
    },
    Subscriptions {
        championship_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum GameCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Details { game_id: String },
    /// Parent of a region-specific game
    Parent { game_id: String },
}

#[derive(Subcommand, Debug)]
pub enum HubCommand {
    Details {
        hub_id: String,
        /// Inline the game entity (wins over --expand-organizer)
        #[arg(long)]
        expand_game: bool,
        /// Inline the organizer entity
        #[arg(long)]
        expand_organizer: bool,
    },
    Matches {
        hub_id: String,
        /// all (default), upcoming, ongoing or past
        #[arg(long = "type")]
        type_of_match: Option<MatchType>,
        #[command(flatten)]
        page: PageArgs,
    },
    Members {
        hub_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Roles {
        hub_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Stats {
        hub_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum LeaderboardCommand {
    /// All leaderboards of a championship
    Championship {
        championship_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Ranking of one championship group
    ChampionshipGroup {
        championship_id: String,
        group: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// All leaderboards of a hub
    Hub {
        hub_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// All-time ranking of a hub
    HubGeneral {
        hub_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Ranking of one hub season
    HubSeason {
        hub_id: String,
        season: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Ranking by leaderboard ID
    Ranking {
        leaderboard_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum MatchCommand {
    Details { match_id: String },
    Stats { match_id: String },
}

#[derive(Subcommand, Debug)]
pub enum OrganizerCommand {
    /// Look up an organizer by --name or --id
    Details {
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "id")]
        organizer_id: Option<String>,
    },
    Championships {
        organizer_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Games { organizer_id: String },
    Hubs {
        organizer_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Tournaments {
        organizer_id: String,
        /// upcoming (default) or past
        #[arg(long = "type")]
        type_of_tournament: Option<TournamentType>,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlayerCommand {
    /// Look up a player by --nickname or --game-player-id
    Details {
        #[arg(long)]
        nickname: Option<String>,
        #[arg(long)]
        game: Option<String>,
        #[arg(long)]
        game_player_id: Option<String>,
    },
    /// Look up a player by FACEIT player ID
    ById { player_id: String },
    /// Match history; --game is required unless --from or --to is given
    History {
        player_id: String,
        #[arg(long)]
        game: Option<String>,
        /// Lower bound as a unix timestamp
        #[arg(long)]
        from: Option<i64>,
        /// Upper bound as a unix timestamp
        #[arg(long)]
        to: Option<i64>,
        #[command(flatten)]
        page: PageArgs,
    },
    Hubs {
        player_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Stats { player_id: String, game_id: String },
    Tournaments {
        player_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum RankingCommand {
    /// Global ranking of a game in a region
    Global {
        game_id: String,
        region: String,
        #[arg(long)]
        country: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// A player's position in the global ranking
    Player {
        game_id: String,
        region: String,
        player_id: String,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SearchCommand {
    Championships {
        name: String,
        /// all (default), upcoming, ongoing or past
        #[arg(long = "type")]
        type_of_competition: Option<MatchType>,
        #[arg(long)]
        game: Option<String>,
        /// Ignored when --game is given
        #[arg(long)]
        region: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    Hubs {
        name: String,
        #[arg(long)]
        game: Option<String>,
        /// Ignored when --game is given
        #[arg(long)]
        region: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    Organizers {
        name: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Players {
        nickname: String,
        #[arg(long)]
        game: Option<String>,
        /// Ignored when --game is given
        #[arg(long)]
        country: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    Teams {
        nickname: String,
        #[arg(long)]
        game: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    Tournaments {
        name: String,
        /// all (default), upcoming, ongoing or past
        #[arg(long = "type")]
        type_of_competition: Option<MatchType>,
        #[arg(long)]
        game: Option<String>,
        /// Ignored when --game is given
        #[arg(long)]
        region: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum TeamCommand {
    Details { team_id: String },
    Stats { team_id: String, game_id: String },
    Tournaments {
        team_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum TournamentCommand {
    List {
        /// upcoming (default) or past
        #[arg(long = "type")]
        type_of_tournament: Option<TournamentType>,
        #[arg(long)]
        game: Option<String>,
        /// Ignored when --game is given
        #[arg(long)]
        region: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    Details {
        tournament_id: String,
        /// Inline the organizer entity (wins over --expand-game)
        #[arg(long)]
        expand_organizer: bool,
        /// Inline the game entity
        #[arg(long)]
        expand_game: bool,
    },
    Brackets { tournament_id: String },
    Matches {
        tournament_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Teams {
        tournament_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

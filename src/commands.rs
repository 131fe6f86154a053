use crate::cli::{
    ChampionshipCommand, ConfigCommand, GameCommand, HubCommand, LeaderboardCommand,
    MatchCommand, OrganizerCommand, PlayerCommand, QueryCommand, RankingCommand, SearchCommand,
    TeamCommand, TournamentCommand,
};
use faceit_data::api::{ApiResult, FaceitData, HttpTransport};
use faceit_data::config::Config;
use faceit_data::error::AppError;
use serde_json::Value;
use tracing::info;

/// Runs a query subcommand against the Data API.
pub async fn run_query<T: HttpTransport>(faceit: &FaceitData<T>, query: QueryCommand) -> ApiResult {
    match query {
        QueryCommand::Championship(command) => championship(faceit, command).await,
        QueryCommand::Game(command) => game(faceit, command).await,
        QueryCommand::Hub(command) => hub(faceit, command).await,
        QueryCommand::Leaderboard(command) => leaderboard(faceit, command).await,
        QueryCommand::Match(command) => match_query(faceit, command).await,
        QueryCommand::Organizer(command) => organizer(faceit, command).await,
        QueryCommand::Player(command) => player(faceit, command).await,
        QueryCommand::Ranking(command) => ranking(faceit, command).await,
        QueryCommand::Search(command) => search(faceit, command).await,
        QueryCommand::Team(command) => team(faceit, command).await,
        QueryCommand::Tournament(command) => tournament(faceit, command).await,
    }
}

async fn championship<T: HttpTransport>(
    faceit: &FaceitData<T>,
    command: ChampionshipCommand,
) -> ApiResult {
    match command {
        ChampionshipCommand::Details {
            championship_id,
            expand_game,
            expand_organizer,
        } => {
            faceit
                .championship_details(&championship_id, expand_game, expand_organizer)
                .await
        }
        ChampionshipCommand::Matches {
            championship_id,
            type_of_match,
            page,
        } => {
            faceit
                .championship_matches(&championship_id, type_of_match, page.offset, page.limit)
                .await
        }
        ChampionshipCommand::Subscriptions {
            championship_id,
            page,
        } => {
            faceit
                .championship_subscriptions(&championship_id, page.offset, page.limit)
                .await
        }
    }
}

async fn game<T: HttpTransport>(faceit: &FaceitData<T>, command: GameCommand) -> ApiResult {
    match command {
        GameCommand::List { page } => faceit.all_faceit_games(page.offset, page.limit).await,
        GameCommand::Details { game_id } => faceit.game_details(&game_id).await,
        GameCommand::Parent { game_id } => faceit.game_details_parent(&game_id).await,
    }
}

async fn hub<T: HttpTransport>(faceit: &FaceitData<T>, command: HubCommand) -> ApiResult {
    match command {
        HubCommand::Details {
            hub_id,
            expand_game,
            expand_organizer,
        } => faceit.hub_details(&hub_id, expand_game, expand_organizer).await,
        HubCommand::Matches {
            hub_id,
            type_of_match,
            page,
        } => {
            faceit
                .hub_matches(&hub_id, type_of_match, page.offset, page.limit)
                .await
        }
        HubCommand::Members { hub_id, page } => {
            faceit.hub_members(&hub_id, page.offset, page.limit).await
        }
        HubCommand::Roles { hub_id, page } => {
            faceit.hub_roles(&hub_id, page.offset, page.limit).await
        }
        HubCommand::Stats { hub_id, page } => {
            faceit.hub_statistics(&hub_id, page.offset, page.limit).await
        }
    }
}

async fn leaderboard<T: HttpTransport>(
    faceit: &FaceitData<T>,
    command: LeaderboardCommand,
) -> ApiResult {
    match command {
        LeaderboardCommand::Championship {
            championship_id,
            page,
        } => {
            faceit
                .championship_leaderboards(&championship_id, page.offset, page.limit)
                .await
        }
        LeaderboardCommand::ChampionshipGroup {
            championship_id,
            group,
            page,
        } => {
            faceit
                .championship_group_ranking(&championship_id, &group, page.offset, page.limit)
                .await
        }
        LeaderboardCommand::Hub { hub_id, page } => {
            faceit.hub_leaderboards(&hub_id, page.offset, page.limit).await
        }
        LeaderboardCommand::HubGeneral { hub_id, page } => {
            faceit.hub_ranking(&hub_id, page.offset, page.limit).await
        }
        LeaderboardCommand::HubSeason {
            hub_id,
            season,
            page,
        } => {
            faceit
                .hub_season_ranking(&hub_id, &season, page.offset, page.limit)
                .await
        }
        LeaderboardCommand::Ranking {
            leaderboard_id,
            page,
        } => {
            faceit
                .leaderboard_ranking(&leaderboard_id, page.offset, page.limit)
                .await
        }
    }
}

async fn match_query<T: HttpTransport>(faceit: &FaceitData<T>, command: MatchCommand) -> ApiResult {
    match command {
        MatchCommand::Details { match_id } => faceit.match_details(&match_id).await,
        MatchCommand::Stats { match_id } => faceit.match_stats(&match_id).await,
    }
}

async fn organizer<T: HttpTransport>(
    faceit: &FaceitData<T>,
    command: OrganizerCommand,
) -> ApiResult {
    match command {
        OrganizerCommand::Details { name, organizer_id } => {
            faceit
                .organizer_details(name.as_deref(), organizer_id.as_deref())
                .await
        }
        OrganizerCommand::Championships { organizer_id, page } => {
            faceit
                .organizer_championships(&organizer_id, page.offset, page.limit)
                .await
        }
        OrganizerCommand::Games { organizer_id } => faceit.organizer_games(&organizer_id).await,
        OrganizerCommand::Hubs { organizer_id, page } => {
            faceit
                .organizer_hubs(&organizer_id, page.offset, page.limit)
                .await
        }
        OrganizerCommand::Tournaments {
            organizer_id,
            type_of_tournament,
            page,
        } => {
            faceit
                .organizer_tournaments(&organizer_id, type_of_tournament, page.offset, page.limit)
                .await
        }
    }
}

async fn player<T: HttpTransport>(faceit: &FaceitData<T>, command: PlayerCommand) -> ApiResult {
    match command {
        PlayerCommand::Details {
            nickname,
            game,
            game_player_id,
        } => {
            faceit
                .player_details(nickname.as_deref(), game.as_deref(), game_player_id.as_deref())
                .await
        }
        PlayerCommand::ById { player_id } => faceit.player_id_details(&player_id).await,
        PlayerCommand::History {
            player_id,
            game,
            from,
            to,
            page,
        } => {
            faceit
                .player_matches(&player_id, game.as_deref(), from, to, page.offset, page.limit)
                .await
        }
        PlayerCommand::Hubs { player_id, page } => {
            faceit.player_hubs(&player_id, page.offset, page.limit).await
        }
        PlayerCommand::Stats { player_id, game_id } => {
            faceit.player_stats(&player_id, &game_id).await
        }
        PlayerCommand::Tournaments { player_id, page } => {
            faceit
                .player_tournaments(&player_id, page.offset, page.limit)
                .await
        }
    }
}

async fn ranking<T: HttpTransport>(faceit: &FaceitData<T>, command: RankingCommand) -> ApiResult {
    match command {
        RankingCommand::Global {
            game_id,
            region,
            country,
            page,
        } => {
            faceit
                .game_global_ranking(&game_id, &region, country.as_deref(), page.offset, page.limit)
                .await
        }
        RankingCommand::Player {
            game_id,
            region,
            player_id,
            country,
            limit,
        } => {
            faceit
                .player_position_global_ranking(
                    &game_id,
                    &region,
                    &player_id,
                    country.as_deref(),
                    limit,
                )
                .await
        }
    }
}

async fn search<T: HttpTransport>(faceit: &FaceitData<T>, command: SearchCommand) -> ApiResult {
    match command {
        SearchCommand::Championships {
            name,
            type_of_competition,
            game,
            region,
            page,
        } => {
            faceit
                .search_championships(
                    &name,
                    type_of_competition,
                    game.as_deref(),
                    region.as_deref(),
                    page.offset,
                    page.limit,
                )
                .await
        }
        SearchCommand::Hubs {
            name,
            game,
            region,
            page,
        } => {
            faceit
                .search_hubs(
                    &name,
                    game.as_deref(),
                    region.as_deref(),
                    page.offset,
                    page.limit,
                )
                .await
        }
        SearchCommand::Organizers { name, page } => {
            faceit
                .search_organizers(&name, page.offset, page.limit)
                .await
        }
        SearchCommand::Players {
            nickname,
            game,
            country,
            page,
        } => {
            faceit
                .search_players(
                    &nickname,
                    game.as_deref(),
                    country.as_deref(),
                    page.offset,
                    page.limit,
                )
                .await
        }
        SearchCommand::Teams {
            nickname,
            game,
            page,
        } => {
            faceit
                .search_teams(&nickname, game.as_deref(), page.offset, page.limit)
                .await
        }
        SearchCommand::Tournaments {
            name,
            type_of_competition,
            game,
            region,
            page,
        } => {
            faceit
                .search_tournaments(
                    &name,
                    type_of_competition,
                    game.as_deref(),
                    region.as_deref(),
                    page.offset,
                    page.limit,
                )
                .await
        }
    }
}

async fn team<T: HttpTransport>(faceit: &FaceitData<T>, command: TeamCommand) -> ApiResult {
    match command {
        TeamCommand::Details { team_id } => faceit.team_details(&team_id).await,
        TeamCommand::Stats { team_id, game_id } => faceit.team_stats(&team_id, &game_id).await,
        TeamCommand::Tournaments { team_id, page } => {
            faceit
                .team_tournaments(&team_id, page.offset, page.limit)
                .await
        }
    }
}

async fn tournament<T: HttpTransport>(
    faceit: &FaceitData<T>,
    command: TournamentCommand,
) -> ApiResult {
    match command {
        TournamentCommand::List {
            type_of_tournament,
            game,
            region,
            page,
        } => {
            faceit
                .all_tournaments(
                    type_of_tournament,
                    game.as_deref(),
                    region.as_deref(),
                    page.offset,
                    page.limit,
                )
                .await
        }
        TournamentCommand::Details {
            tournament_id,
            expand_organizer,
            expand_game,
        } => {
            faceit
                .tournament_details(&tournament_id, expand_organizer, expand_game)
                .await
        }
        TournamentCommand::Brackets { tournament_id } => {
            faceit.tournament_brackets(&tournament_id).await
        }
        TournamentCommand::Matches {
            tournament_id,
            page,
        } => {
            faceit
                .tournament_matches(&tournament_id, page.offset, page.limit)
                .await
        }
        TournamentCommand::Teams {
            tournament_id,
            page,
        } => {
            faceit
                .tournament_teams(&tournament_id, page.offset, page.limit)
                .await
        }
    }
}

/// Renders a query result as JSON, pretty-printed unless `compact` is set.
///
/// Returns `None` when the API answered with a non-success status.
pub fn render_result(result: Option<&Value>, compact: bool) -> Result<Option<String>, AppError> {
    let Some(value) = result else {
        return Ok(None);
    };
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(Some(rendered))
}

/// Prints a query result to stdout, or a notice to stderr when there is none.
pub fn print_result(result: Option<&Value>, compact: bool) -> Result<(), AppError> {
    match render_result(result, compact)? {
        Some(rendered) => println!("{rendered}"),
        None => eprintln!("No result: the API did not return a successful response"),
    }
    Ok(())
}

/// Handles the `config` subcommands.
///
/// Updates are applied to the stored file only; environment overrides are
/// not written back. An update that leaves the file invalid is not saved.
pub async fn handle_config_command(command: ConfigCommand) -> Result<(), AppError> {
    if let ConfigCommand::Show = command {
        return Config::display().await;
    }

    let mut config = Config::load_file_or_default().await?;
    apply_config_update(&mut config, command)?;
    config.save().await?;

    info!("Configuration saved to {}", Config::get_config_path());
    println!("Config updated successfully!");
    Ok(())
}

fn apply_config_update(config: &mut Config, command: ConfigCommand) -> Result<(), AppError> {
    match command {
        ConfigCommand::Show => {}
        ConfigCommand::SetToken { token } => config.api_token = token,
        ConfigCommand::SetBaseUrl { base_url } => config.base_url = base_url,
        ConfigCommand::SetLogFile { path } => config.log_file_path = Some(path),
        ConfigCommand::ClearLogFile => config.log_file_path = None,
    }
    config.validate_settings()
}

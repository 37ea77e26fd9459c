//! The view projector: selection state plus datasets in, view model out.
//!
//! [`project`] is a pure function of its inputs. It rebuilds every panel
//! from scratch on each call, so readiness and insights can never go stale.
//! Lookups that miss are dropped and reported; storage failures degrade to
//! an empty view rather than reaching the render path.
//!
//! Alongside the explorer chart every projection carries the frame of the
//! current narrative scene, whose league-level chart is built from the same
//! league trend the side panels use.

use crate::config::DashboardConfig;
use crate::scene::Scene;
use crate::selection::{AnalysisMode, ChartMetric, SelectionState};
use crate::view_model::{
    BenchmarkRow, CareerPanel, ChartData, ChartReadiness, Insight, LegendEntry, QuickStat,
    RankingBar, SceneView, Series, TeamPanel, TrendPoint, ViewModel,
};
use nba3_core::{Era, LookupMiss, SeasonRecord, YearWindow};
use nba3_db::Database;
use nba3_metrics::{
    career_progression, career_summary, consistency_rating, growth_percentage, impact_score,
    league_benchmarks, league_trends, pearson_correlation, percentile_rank, season_deltas,
    team_summary, true_shooting_approx, window_aggregate, LeagueTrendPoint, MetricsError,
    TrueShootingInputs,
};

/// Fewest plotted points worth reporting a correlation for.
const MIN_CORRELATION_POINTS: usize = 3;

/// Compute the view model for `state`.
pub fn project(state: &SelectionState, db: &Database, config: &DashboardConfig) -> ViewModel {
    match try_project(state, db, config) {
        Ok(vm) => {
            log::debug!(
                "[NBA3] projector: scene={:?} mode={:?} window={} readiness={:?} marks={} dropped={}",
                vm.scene.scene,
                vm.mode,
                vm.window,
                vm.readiness,
                vm.mark_count(),
                vm.dropped_keys.len()
            );
            vm
        }
        Err(e) => {
            log::error!("[NBA3] projector: projection failed, showing empty view: {:#}", e);
            ViewModel::empty(state.scene(), state.mode(), state.window())
        }
    }
}

fn try_project(
    state: &SelectionState,
    db: &Database,
    config: &DashboardConfig,
) -> anyhow::Result<ViewModel> {
    let mut vm = ViewModel::empty(state.scene(), state.mode(), state.window());
    let mut ranking_leader = None;
    match state.mode() {
        AnalysisMode::Teams => project_teams(state, db, config, &mut vm)?,
        AnalysisMode::Players => project_players(state, db, config, &mut vm)?,
        AnalysisMode::Shooters => {
            ranking_leader = project_shooters(state, db, config, &mut vm)?;
        }
    }

    vm.league_trend = empty_on_no_data(league_trends(&db.league_seasons()?))?;
    vm.scene = project_scene(state.scene(), &vm.league_trend, db, config)?;
    vm.benchmarks = benchmark_rows(state.mode(), db, config)?;
    vm.insights = insights(state, &vm)?;
    vm.quick_stats = quick_stats(state, &vm, ranking_leader);
    Ok(vm)
}

/// An empty dataset is a normal state for the side panels.
fn empty_on_no_data<T>(result: Result<Vec<T>, MetricsError>) -> anyhow::Result<Vec<T>> {
    match result {
        Ok(values) => Ok(values),
        Err(MetricsError::EmptySeries) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

fn record_miss(vm: &mut ViewModel, kind: &'static str, key: &str) {
    let miss = LookupMiss {
        kind,
        key: key.to_string(),
    };
    log::warn!("[NBA3] projector: {}, dropping it from the view", miss);
    vm.dropped_keys.push(miss.key);
}

/// Build one trend line from an entity's full season series, plotting only
/// the seasons `keep` admits.
///
/// Deltas, progression and consistency are computed against the full
/// history so a point's figures do not depend on the window.
fn build_series(
    key: &str,
    color: &str,
    seasons: &[SeasonRecord],
    keep: impl Fn(&SeasonRecord) -> bool,
    metric: ChartMetric,
    config: &DashboardConfig,
) -> anyhow::Result<Option<Series>> {
    if seasons.is_empty() {
        return Ok(None);
    }
    let metrics = &config.metrics;
    let deltas = season_deltas(seasons)?;
    let progression = career_progression(seasons)?;

    let mut points = Vec::new();
    for (i, season) in seasons.iter().enumerate() {
        if !keep(season) {
            continue;
        }
        points.push(TrendPoint {
            year: season.year,
            value: metric.value(season, metrics),
            attempts: season.three_pt_attempts,
            made: season.three_pt_made,
            percentage: season.three_pt_percentage,
            three_point_rate: season.three_point_rate(),
            efg_percentage: season.efg_percentage,
            rate_delta: deltas[i].rate_delta,
            progression: progression[i],
            impact_score: impact_score(season, metrics),
            consistency: consistency_rating(seasons, i, metrics)?,
            true_shooting: true_shooting_approx(TrueShootingInputs::from(season), metrics),
        });
    }

    if points.is_empty() {
        return Ok(None);
    }
    Ok(Some(Series {
        key: key.to_string(),
        color: color.to_string(),
        league: false,
        points,
    }))
}

/// Three-point rates of a season pool, ascending, for percentile lookups.
fn sorted_rates(pool: &[SeasonRecord]) -> Vec<f64> {
    let mut rates: Vec<f64> = pool.iter().map(|s| s.three_point_rate()).collect();
    rates.sort_by(f64::total_cmp);
    rates
}

fn finish_trend(vm: &mut ViewModel, selected: usize, metric: ChartMetric, series: Vec<Series>) {
    if selected == 0 {
        vm.set_readiness(ChartReadiness::EmptySelection);
    } else if series.is_empty() {
        vm.set_readiness(ChartReadiness::NoDataInRange);
    } else {
        vm.legend = series
            .iter()
            .map(|s| LegendEntry {
                label: s.key.clone(),
                color: s.color.clone(),
            })
            .collect();
        vm.chart = ChartData::Trend {
            metric,
            y_label: metric.axis_label().to_string(),
            series,
        };
        vm.set_readiness(ChartReadiness::Ready);
    }
}

fn project_teams(
    state: &SelectionState,
    db: &Database,
    config: &DashboardConfig,
    vm: &mut ViewModel,
) -> anyhow::Result<()> {
    let window = state.window();
    let filter = state.team_filter();
    let metric = state.effective_chart_metric();
    let winning_min_wins = config.metrics.winning_min_wins;
    let pool = sorted_rates(&db.pooled_team_seasons()?);

    let mut series = Vec::new();
    let mut panels = Vec::new();
    for (position, key) in state.teams().iter().enumerate() {
        let Some(team) = db.find_team(key)? else {
            record_miss(vm, "team", key);
            continue;
        };
        let color = config.color_for(position);
        let keep = |s: &SeasonRecord| window.contains(s.year) && filter.admits(s, winning_min_wins);
        let Some(line) = build_series(key, color, &team.seasons, &keep, metric, config)? else {
            continue;
        };
        let in_window: Vec<SeasonRecord> =
            team.seasons.iter().filter(|s| keep(*s)).cloned().collect();
        let aggregate = window_aggregate(&in_window)?;
        panels.push(TeamPanel {
            team: team.name.clone(),
            color: color.to_string(),
            summary: team_summary(&team.seasons)?,
            rate_percentile: percentile_rank(&pool, aggregate.average_rate).ok(),
            window: aggregate,
        });
        series.push(line);
    }
    vm.teams = panels;
    finish_trend(vm, state.teams().len(), metric, series);
    Ok(())
}

fn project_players(
    state: &SelectionState,
    db: &Database,
    config: &DashboardConfig,
    vm: &mut ViewModel,
) -> anyhow::Result<()> {
    let window = state.window();
    let metric = state.effective_chart_metric();
    let pool = sorted_rates(&db.pooled_player_seasons()?);

    let mut series = Vec::new();
    let mut careers = Vec::new();
    for (position, key) in state.players().iter().enumerate() {
        let Some(player) = db.find_player(key)? else {
            record_miss(vm, "player", key);
            continue;
        };
        let color = config.color_for(position);
        let Some(line) = build_series(
            key,
            color,
            &player.seasons,
            |s| window.contains(s.year),
            metric,
            config,
        )?
        else {
            continue;
        };
        let in_window: Vec<SeasonRecord> = player
            .seasons
            .iter()
            .filter(|s| window.contains(s.year))
            .cloned()
            .collect();
        let aggregate = window_aggregate(&in_window)?;
        careers.push(CareerPanel {
            player: player.name.clone(),
            color: color.to_string(),
            career: career_summary(&player.seasons, &config.metrics)?,
            rate_percentile: percentile_rank(&pool, aggregate.average_rate).ok(),
            window: aggregate,
        });
        series.push(line);
    }
    vm.careers = careers;
    finish_trend(vm, state.players().len(), metric, series);
    Ok(())
}

/// Returns the ranking leader's career percentage for the quick stats.
fn project_shooters(
    state: &SelectionState,
    db: &Database,
    config: &DashboardConfig,
    vm: &mut ViewModel,
) -> anyhow::Result<Option<f64>> {
    let ranking = db.elite_shooters()?;
    let selected = state.players();
    let shown: Vec<(usize, _)> = if selected.is_empty() {
        ranking
            .iter()
            .enumerate()
            .take(config.shooter_default_count)
            .collect()
    } else {
        ranking
            .iter()
            .enumerate()
            .filter(|(_, s)| selected.contains(&s.player))
            .collect()
    };

    let bars: Vec<RankingBar> = shown
        .into_iter()
        .enumerate()
        .map(|(i, (position, s))| RankingBar {
            rank: position + 1,
            player: s.player.clone(),
            percentage: s.career_three_pt_percentage,
            made: s.career_three_pt_made,
            attempts: s.career_three_pt_attempts,
            years_active: s.years_active.clone(),
            seasons_played: s.seasons_played,
            color: config.color_for(i).to_string(),
        })
        .collect();

    if bars.is_empty() {
        vm.set_readiness(ChartReadiness::NoDataInRange);
    } else {
        vm.chart = ChartData::Ranking { bars };
        vm.set_readiness(ChartReadiness::Ready);
    }
    Ok(ranking.first().map(|s| s.career_three_pt_percentage))
}

/// League rate lines are drawn without per-entity shot counts.
fn league_series(
    key: &str,
    color: &str,
    trend: &[LeagueTrendPoint],
    value: impl Fn(&LeagueTrendPoint) -> f64,
) -> Series {
    let base = trend.first().map_or(0.0, |p| p.three_pt_rate);
    let points = trend
        .iter()
        .map(|p| TrendPoint {
            year: p.year,
            value: value(p),
            attempts: 0,
            made: 0,
            percentage: 0.0,
            three_point_rate: p.three_pt_rate,
            efg_percentage: p.efg_percentage,
            rate_delta: p.three_pt_rate_delta,
            progression: p.three_pt_rate - base,
            impact_score: 0.0,
            consistency: 0.0,
            true_shooting: 0.0,
        })
        .collect();
    Series {
        key: key.to_string(),
        color: color.to_string(),
        league: true,
        points,
    }
}

fn trend_chart(metric: ChartMetric, y_label: &str, series: Vec<Series>) -> ChartData {
    ChartData::Trend {
        metric,
        y_label: y_label.to_string(),
        series,
    }
}

fn span_of(trend: &[LeagueTrendPoint]) -> anyhow::Result<Option<YearWindow>> {
    match (trend.first(), trend.last()) {
        (Some(first), Some(last)) => Ok(Some(YearWindow::new(first.year, last.year)?)),
        _ => Ok(None),
    }
}

/// Build the narrative frame for `scene`. The explorer scene draws nothing
/// of its own; the explorer chart stands in for it.
fn project_scene(
    scene: Scene,
    trend: &[LeagueTrendPoint],
    db: &Database,
    config: &DashboardConfig,
) -> anyhow::Result<SceneView> {
    let mut view = SceneView::new(scene);
    let Some(span) = span_of(trend)? else {
        if scene != Scene::Explorer {
            log::warn!("[NBA3] projector: no league seasons, {:?} scene has nothing to draw", scene);
        }
        return Ok(view);
    };
    match scene {
        Scene::Overview => overview_scene(&mut view, trend, span, config),
        Scene::Evolution => evolution_scene(&mut view, trend, span, config),
        Scene::Players => players_scene(&mut view, trend, db, config)?,
        Scene::Efficiency => efficiency_scene(&mut view, trend, span, config)?,
        Scene::Explorer => {}
    }
    Ok(view)
}

fn overview_scene(
    view: &mut SceneView,
    trend: &[LeagueTrendPoint],
    span: YearWindow,
    config: &DashboardConfig,
) {
    let ends: Vec<LeagueTrendPoint> = match trend {
        [first, .., last] => vec![first.clone(), last.clone()],
        _ => trend.to_vec(),
    };
    view.window = span;
    view.chart = trend_chart(
        ChartMetric::Rate,
        "Share of Shot Attempts (%)",
        vec![
            league_series("Three-Point Rate", config.color_for(0), &ends, |p| p.three_pt_rate),
            league_series("Mid-Range Rate", config.color_for(1), &ends, |p| p.mid_range_rate),
        ],
    );
    view.facts.extend(growth_insight(trend));
    if let [first, .., last] = trend {
        view.facts.push(Insight {
            icon: "📉",
            text: format!(
                "Mid-range share fell from {:.1}% in {} to {:.1}% in {}",
                first.mid_range_rate, first.year, last.mid_range_rate, last.year
            ),
        });
    }
}

fn evolution_scene(
    view: &mut SceneView,
    trend: &[LeagueTrendPoint],
    span: YearWindow,
    config: &DashboardConfig,
) {
    view.window = span;
    view.chart = trend_chart(
        ChartMetric::Rate,
        "Share of Shot Attempts (%)",
        vec![
            league_series("Three-Point Rate", config.color_for(0), trend, |p| p.three_pt_rate),
            league_series("Mid-Range Rate", config.color_for(1), trend, |p| p.mid_range_rate),
        ],
    );
    // first season has no delta
    let biggest = trend.iter().skip(1).fold(None::<&LeagueTrendPoint>, |best, p| match best {
        Some(b) if b.three_pt_rate_delta >= p.three_pt_rate_delta => Some(b),
        _ => Some(p),
    });
    if let Some(jump) = biggest {
        view.facts.push(Insight {
            icon: "🚀",
            text: format!(
                "Largest one-season jump in three-point rate: {:+.1} points in {}",
                jump.three_pt_rate_delta, jump.year
            ),
        });
    }
}

fn players_scene(
    view: &mut SceneView,
    trend: &[LeagueTrendPoint],
    db: &Database,
    config: &DashboardConfig,
) -> anyhow::Result<()> {
    let name = config.featured_player.as_str();
    let Some(player) = db.find_player(name)? else {
        log::warn!("[NBA3] projector: featured player {} not found", name);
        view.facts.push(Insight {
            icon: "⚠️",
            text: format!("{} data not found", name),
        });
        return Ok(());
    };
    let (Some(first), Some(last)) = (player.seasons.first(), player.seasons.last()) else {
        return Ok(());
    };
    let window = YearWindow::new(first.year, last.year)?;
    let league: Vec<LeagueTrendPoint> = trend
        .iter()
        .filter(|p| window.contains(p.year))
        .cloned()
        .collect();
    let Some(line) = build_series(
        name,
        config.color_for(0),
        &player.seasons,
        |_| true,
        ChartMetric::Rate,
        config,
    )?
    else {
        return Ok(());
    };

    view.window = window;
    view.chart = trend_chart(
        ChartMetric::Rate,
        ChartMetric::Rate.axis_label(),
        vec![
            line,
            league_series("League Average", config.color_for(1), &league, |p| p.three_pt_rate),
        ],
    );
    if let Some(league_last) = league.iter().find(|p| p.year == last.year) {
        view.facts.push(Insight {
            icon: "🏀",
            text: format!(
                "In {} {} took {:.1}% of shots from three, against a league average of {:.1}%",
                last.year,
                name,
                last.three_point_rate(),
                league_last.three_pt_rate
            ),
        });
    }
    Ok(())
}

fn efficiency_scene(
    view: &mut SceneView,
    trend: &[LeagueTrendPoint],
    span: YearWindow,
    config: &DashboardConfig,
) -> anyhow::Result<()> {
    view.window = span;
    view.chart = trend_chart(
        ChartMetric::Efficiency,
        ChartMetric::Efficiency.axis_label(),
        vec![league_series("League eFG%", config.color_for(0), trend, |p| p.efg_percentage)],
    );
    if let [first, .., last] = trend {
        view.facts.push(Insight {
            icon: "📈",
            text: format!(
                "League eFG% moved from {:.1}% to {:.1}% between {} and {}",
                first.efg_percentage, last.efg_percentage, first.year, last.year
            ),
        });
    }
    if trend.len() >= MIN_CORRELATION_POINTS {
        let pairs: Vec<(f64, f64)> = trend
            .iter()
            .map(|p| (p.three_pt_rate, p.efg_percentage))
            .collect();
        let r = pearson_correlation(&pairs)?;
        view.facts.push(Insight {
            icon: "🔗",
            text: format!(
                "Across the league, three-point rate and eFG% have a correlation of r = {:.2}",
                r
            ),
        });
    }
    Ok(())
}

fn benchmark_rows(
    mode: AnalysisMode,
    db: &Database,
    config: &DashboardConfig,
) -> anyhow::Result<Vec<BenchmarkRow>> {
    let pooled = match mode {
        AnalysisMode::Teams => db.pooled_team_seasons()?,
        AnalysisMode::Players | AnalysisMode::Shooters => db.pooled_player_seasons()?,
    };
    let table = match league_benchmarks(&pooled, &config.metrics) {
        Ok(table) => table,
        Err(MetricsError::EmptySeries) => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(table
        .into_iter()
        .map(|(metric, benchmarks)| BenchmarkRow {
            metric,
            label: metric.label(),
            benchmarks,
        })
        .collect())
}

fn growth_insight(trend: &[LeagueTrendPoint]) -> Option<Insight> {
    let (first, last) = match trend {
        [first, .., last] => (first, last),
        _ => return None,
    };
    let growth = growth_percentage(first.three_pt_rate, last.three_pt_rate)?;
    let direction = if growth >= 0.0 { "increased" } else { "decreased" };
    Some(Insight {
        icon: "🎯",
        text: format!(
            "League three-point rate has {} by {:.0}% since {}",
            direction,
            growth.abs(),
            first.year
        ),
    })
}

fn correlation_insight(vm: &ViewModel) -> anyhow::Result<Option<Insight>> {
    let ChartData::Trend { series, .. } = &vm.chart else {
        return Ok(None);
    };
    let pairs: Vec<(f64, f64)> = series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|p| (p.three_point_rate, p.efg_percentage))
        .collect();
    if pairs.len() < MIN_CORRELATION_POINTS {
        return Ok(None);
    }
    let r = pearson_correlation(&pairs)?;
    let strength = match r.abs() {
        a if a >= 0.7 => "strongly",
        a if a >= 0.4 => "moderately",
        _ => "weakly",
    };
    let sign = if r >= 0.0 { "positively" } else { "negatively" };
    Ok(Some(Insight {
        icon: "🔗",
        text: format!(
            "Three-point rate and efficiency are {} {} correlated across the plotted seasons (r = {:.2})",
            strength, sign, r
        ),
    }))
}

fn window_insight(window: YearWindow) -> Insight {
    match Era::matching(&window) {
        Some(era) if era != Era::FullHistory => Insight {
            icon: "📊",
            text: format!("Focused on the {}", era.label()),
        },
        _ => Insight {
            icon: "📊",
            text: "Use the time range controls to focus on specific eras of basketball evolution"
                .to_string(),
        },
    }
}

fn insights(state: &SelectionState, vm: &ViewModel) -> anyhow::Result<Vec<Insight>> {
    let mut out = Vec::new();
    if state.mode() == AnalysisMode::Teams && !state.teams().is_empty() {
        out.push(Insight {
            icon: "📈",
            text: format!(
                "Analyzing {} teams over {} seasons",
                state.teams().len(),
                state.window().season_count()
            ),
        });
    }
    if !state.players().is_empty() {
        out.push(Insight {
            icon: "🏀",
            text: format!(
                "Comparing {} elite shooters from the analysis",
                state.players().len()
            ),
        });
    }
    out.extend(growth_insight(&vm.league_trend));
    out.extend(correlation_insight(vm)?);
    out.push(window_insight(state.window()));
    Ok(out)
}

fn quick_stats(state: &SelectionState, vm: &ViewModel, ranking_leader: Option<f64>) -> Vec<QuickStat> {
    let years = QuickStat {
        label: "Years Analyzed",
        value: state.window().season_count().to_string(),
    };
    match state.mode() {
        AnalysisMode::Teams => vec![
            QuickStat {
                label: "Teams Selected",
                value: state.teams().len().to_string(),
            },
            years,
        ],
        AnalysisMode::Players => vec![
            QuickStat {
                label: "Players Selected",
                value: state.players().len().to_string(),
            },
            years,
        ],
        AnalysisMode::Shooters => {
            let mut stats = vec![QuickStat {
                label: "Shooters Shown",
                value: vm.mark_count().to_string(),
            }];
            if let Some(pct) = ranking_leader {
                stats.push(QuickStat {
                    label: "Top Shooter",
                    value: format!("{}%", pct),
                });
            }
            stats
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_db;
    use crate::selection::TeamSeasonFilter;

    fn config() -> DashboardConfig {
        DashboardConfig::default()
    }

    #[test]
    fn no_selection_is_empty_selection() {
        let db = sample_db();
        let vm = project(&SelectionState::default(), &db, &config());
        assert_eq!(vm.readiness, ChartReadiness::EmptySelection);
        assert_eq!(vm.chart, ChartData::None);
        assert_eq!(vm.title, "Team Three-Point Trends");
        assert!(vm.empty_message.is_some());
    }

    #[test]
    fn team_series_follow_selection_order_and_palette() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.toggle_team("Warriors");
        state.toggle_team("Celtics");
        let vm = project(&state, &db, &config());
        assert!(vm.is_ready());
        let ChartData::Trend { metric, series, .. } = &vm.chart else {
            panic!("expected trend chart");
        };
        assert_eq!(*metric, ChartMetric::Attempts);
        assert_eq!(series[0].key, "Warriors");
        assert_eq!(series[0].color, "#ea580c");
        assert_eq!(series[1].key, "Celtics");
        assert_eq!(series[1].color, "#1e40af");
        let years: Vec<i32> = series[0].points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2010, 2011, 2012, 2013, 2014]);
        assert_eq!(series[0].points[0].value, 1500.0);
        assert_eq!(series[0].points[0].consistency, 50.0);
        assert_eq!(series[0].points[1].consistency, 50.0);
        assert!(series[0].points[2].consistency < 100.0);
        assert_eq!(series[0].points[0].rate_delta, 0.0);
        assert_eq!(vm.legend.len(), 2);
        assert_eq!(vm.legend[1].label, "Celtics");
    }

    #[test]
    fn unknown_key_is_dropped_and_reported() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.toggle_team("Sonics");
        state.toggle_team("Celtics");
        let vm = project(&state, &db, &config());
        assert_eq!(vm.dropped_keys, vec!["Sonics".to_string()]);
        assert_eq!(vm.mark_count(), 1);
        let ChartData::Trend { series, .. } = &vm.chart else {
            panic!("expected trend chart");
        };
        assert_eq!(series[0].color, "#1e40af");
    }

    #[test]
    fn window_without_seasons_is_no_data() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.toggle_team("Warriors");
        state.set_window(2015, 2020).unwrap();
        let vm = project(&state, &db, &config());
        assert_eq!(vm.readiness, ChartReadiness::NoDataInRange);
        assert_eq!(vm.mark_count(), 0);
        assert_ne!(
            vm.empty_message,
            ChartReadiness::EmptySelection.message(AnalysisMode::Teams)
        );
    }

    #[test]
    fn team_filter_limits_plotted_seasons() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.toggle_team("Celtics");
        state.toggle_team("Warriors");
        state.set_window(2010, 2012).unwrap();
        state.set_team_filter(TeamSeasonFilter {
            playoffs_only: true,
            winning_only: false,
        });
        let vm = project(&state, &db, &config());
        assert_eq!(vm.mark_count(), 1);
        assert_eq!(vm.legend[0].label, "Celtics");

        state.set_team_filter(TeamSeasonFilter {
            playoffs_only: false,
            winning_only: true,
        });
        let vm = project(&state, &db, &config());
        let ChartData::Trend { series, .. } = &vm.chart else {
            panic!("expected trend chart");
        };
        let years: Vec<i32> = series[0].points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2010, 2011]);

        state.set_window(2012, 2012).unwrap();
        let vm = project(&state, &db, &config());
        assert_eq!(vm.readiness, ChartReadiness::NoDataInRange);
    }

    #[test]
    fn players_get_career_panels() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.set_mode(AnalysisMode::Players);
        state.toggle_player("Stephen Curry");
        state.set_window(2015, 2024).unwrap();
        let vm = project(&state, &db, &config());
        assert!(vm.is_ready());
        assert_eq!(vm.careers.len(), 1);
        let panel = &vm.careers[0];
        assert_eq!(panel.career.total_seasons, 5);
        assert_eq!(panel.window.seasons, 2);
        assert_eq!(panel.window.total_made, 739);
        let ChartData::Trend { metric, series, .. } = &vm.chart else {
            panic!("expected trend chart");
        };
        assert_eq!(*metric, ChartMetric::Percentage);
        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[0].points[0].value, 45.4);
    }

    #[test]
    fn shooters_default_to_ranking_head() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.set_mode(AnalysisMode::Shooters);
        let vm = project(&state, &db, &config());
        let ChartData::Ranking { bars } = &vm.chart else {
            panic!("expected ranking chart");
        };
        assert_eq!(bars.len(), 10);
        assert_eq!(bars[0].player, "Joe Harris");
        assert_eq!(bars[9].rank, 10);
        assert!(vm
            .quick_stats
            .iter()
            .any(|q| q.label == "Top Shooter" && q.value == "43.6%"));
        assert!(vm
            .quick_stats
            .iter()
            .any(|q| q.label == "Shooters Shown" && q.value == "10"));
    }

    #[test]
    fn shooters_filter_keeps_rank() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.set_mode(AnalysisMode::Shooters);
        state.toggle_player("Ray Allen");
        let vm = project(&state, &db, &config());
        let ChartData::Ranking { bars } = &vm.chart else {
            panic!("expected ranking chart");
        };
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].rank, 9);

        state.toggle_player("Ray Allen");
        state.toggle_player("Nobody Ranked");
        let vm = project(&state, &db, &config());
        assert_eq!(vm.readiness, ChartReadiness::NoDataInRange);
    }

    #[test]
    fn insights_and_quick_stats_track_state() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.toggle_team("Celtics");
        state.toggle_player("Ray Allen");
        state.apply_era(Era::AnalyticsRise);
        let vm = project(&state, &db, &config());
        let texts: Vec<&str> = vm.insights.iter().map(|i| i.text.as_str()).collect();
        assert!(texts.contains(&"Analyzing 1 teams over 6 seasons"));
        assert!(texts.contains(&"Comparing 1 elite shooters from the analysis"));
        assert!(texts.iter().any(|t| t.starts_with("League three-point rate has increased")));
        assert!(texts.contains(&"Focused on the Analytics Rise (2009-2014)"));
        assert_eq!(vm.quick_stats[0].value, "1");
        assert_eq!(vm.quick_stats[1].label, "Years Analyzed");
        assert_eq!(vm.quick_stats[1].value, "6");
    }

    #[test]
    fn benchmarks_follow_entity_kind() {
        let db = sample_db();
        let mut state = SelectionState::default();
        let team_rows = project(&state, &db, &config()).benchmarks;
        state.set_mode(AnalysisMode::Players);
        let player_rows = project(&state, &db, &config()).benchmarks;
        assert_eq!(team_rows.len(), 6);
        assert_eq!(player_rows.len(), 6);
        assert_ne!(team_rows, player_rows);
    }

    #[test]
    fn team_panels_summarise_plotted_teams() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.toggle_team("Celtics");
        state.toggle_team("Sonics");
        let vm = project(&state, &db, &config());
        assert_eq!(vm.teams.len(), 1);
        let panel = &vm.teams[0];
        assert_eq!(panel.team, "Celtics");
        assert_eq!(panel.color, "#ea580c");
        assert_eq!(panel.summary.total_wins, 211);
        assert_eq!(panel.summary.playoff_seasons, 4);
        assert_eq!(panel.summary.average_wins, Some(42.2));
        assert_eq!(panel.window.seasons, 5);
        // 2 of the 13 pooled team seasons sit at or below the Celtics' average
        let pct = panel.rate_percentile.unwrap();
        assert!((pct - 2.0 / 13.0 * 100.0).abs() < 1e-9);

        state.set_team_filter(TeamSeasonFilter {
            playoffs_only: true,
            winning_only: false,
        });
        let vm = project(&state, &db, &config());
        assert_eq!(vm.teams[0].window.seasons, 4);
        assert_eq!(vm.teams[0].summary.total_seasons, 5);
    }

    #[test]
    fn career_panels_rank_window_rate() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.set_mode(AnalysisMode::Players);
        state.toggle_player("Stephen Curry");
        state.set_window(2015, 2024).unwrap();
        let vm = project(&state, &db, &config());
        let pct = vm.careers[0].rate_percentile.unwrap();
        assert!((pct - 9.0 / 11.0 * 100.0).abs() < 1e-9);
        assert!(vm.teams.is_empty());
    }

    #[test]
    fn guided_scenes_draw_league_charts() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.toggle_team("Warriors");

        let vm = project(&state, &db, &config());
        assert_eq!(vm.scene.scene, Scene::Overview);
        assert_eq!(vm.scene.position, 1);
        assert!(!vm.scene.has_timeline);
        let ChartData::Trend { series, .. } = vm.active_chart() else {
            panic!("expected league chart");
        };
        assert_eq!(series.len(), 2);
        assert!(series.iter().all(|s| s.league));
        let years: Vec<i32> = series[0].points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2004, 2024]);
        assert_eq!(series[1].points[1].value, 20.2);
        assert!(vm.scene.facts[0].text.starts_with("League three-point rate has increased"));
        // the explorer chart is still projected underneath
        assert!(vm.is_ready());

        state.next_scene().unwrap();
        let vm = project(&state, &db, &config());
        assert!(vm.scene.has_timeline);
        assert_eq!(vm.active_window(), YearWindow::new(2004, 2024).unwrap());
        let ChartData::Trend { series, .. } = vm.active_chart() else {
            panic!("expected league chart");
        };
        assert_eq!(series[0].points.len(), 21);
        assert_eq!(series[0].points[0].rate_delta, 0.0);

        state.next_scene().unwrap();
        let vm = project(&state, &db, &config());
        assert_eq!(vm.active_window(), YearWindow::new(2010, 2021).unwrap());
        let ChartData::Trend { series, .. } = vm.active_chart() else {
            panic!("expected league chart");
        };
        assert_eq!(series[0].key, "Stephen Curry");
        assert!(!series[0].league);
        assert_eq!(series[1].key, "League Average");
        assert_eq!(series[1].points.first().map(|p| p.year), Some(2010));
        assert_eq!(series[1].points.last().map(|p| p.year), Some(2021));

        state.next_scene().unwrap();
        let vm = project(&state, &db, &config());
        let ChartData::Trend { metric, series, .. } = vm.active_chart() else {
            panic!("expected league chart");
        };
        assert_eq!(*metric, ChartMetric::Efficiency);
        assert_eq!(series[0].points[0].value, 47.1);
        assert!(vm.scene.facts.iter().any(|f| f.text.contains("r = 1.00")));

        state.next_scene().unwrap();
        let vm = project(&state, &db, &config());
        assert_eq!(vm.scene.position, 5);
        assert_eq!(vm.active_chart(), &vm.chart);
        assert_eq!(vm.active_window(), state.window());
    }

    #[test]
    fn missing_featured_player_leaves_scene_empty() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.go_to_scene(Scene::Players.index()).unwrap();
        let config = DashboardConfig {
            featured_player: "Nobody".to_string(),
            ..DashboardConfig::default()
        };
        let vm = project(&state, &db, &config);
        assert_eq!(vm.scene.chart, ChartData::None);
        assert_eq!(vm.scene.facts[0].text, "Nobody data not found");
    }

    #[test]
    fn projection_is_repeatable() {
        let db = sample_db();
        let mut state = SelectionState::default();
        state.toggle_team("Warriors");
        state.toggle_team("Celtics");
        let first = project(&state, &db, &config());
        let second = project(&state, &db, &config());
        assert_eq!(first, second);
    }
}

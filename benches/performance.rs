use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nba::commands::boxscore::format_boxscore;
use nba::commands::scoreboard::format_scoreboard;
use nba::config::Config;
use nba::fixtures::{create_mock_boxscore, create_mock_play_by_play, FINAL_GAME_ID, LIVE_GAME_ID};
use nba::tui::dashboard;
use nba::tui::live::LiveSnapshot;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

fn bench_final_report(c: &mut Criterion) {
    let boxscore = create_mock_boxscore(FINAL_GAME_ID);
    let config = Config::default();

    c.bench_function("format_boxscore", |b| {
        b.iter(|| format_boxscore(black_box(&boxscore), black_box(&config.display)))
    });

    c.bench_function("format_scoreboard", |b| {
        b.iter(|| format_scoreboard(black_box(&boxscore), black_box(&config.display)))
    });
}

fn bench_dashboard_render(c: &mut Criterion) {
    let snapshot = LiveSnapshot::new(
        create_mock_boxscore(LIVE_GAME_ID),
        create_mock_play_by_play(LIVE_GAME_ID),
        "20:45".to_string(),
    );
    let config = Config::default();
    let area = Rect::new(0, 0, 120, 40);

    c.bench_function("dashboard_render", |b| {
        b.iter(|| {
            let mut buf = Buffer::empty(area);
            dashboard::render(area, &mut buf, black_box(&snapshot), &config);
            buf
        })
    });
}

criterion_group!(benches, bench_final_report, bench_dashboard_render);
criterion_main!(benches);

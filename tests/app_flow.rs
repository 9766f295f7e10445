//! Drives the app actor against a mocked backend, the same way the TUI does.

use mockito::Matcher;
use std::time::Duration;
use tokio::sync::mpsc;
use tvguide_ratui::app::{AppSnapshot, AppViewSnapshot, Navigation};
use tvguide_ratui::core::spawn_app_actor;
use tvguide_ratui::domain::{ChannelId, RegionId};
use tvguide_ratui::messages::app::{AppCommand, AppEvent};
use tvguide_ratui::settings::{AppSettings, Overrides, RuntimeConfig};

const CHANNEL: &str = r#"{"id":"c1","channel_number":101,"name":"Euro News","region":"europe","description":"News around the clock","language":"English","timezone":"Europe/London"}"#;
const PROGRAM: &str = r#"{"id":"p1","title":"Morning Report","description":"Headlines","type":"news","duration_minutes":60,"rating":null,"genre":null,"episode_number":null,"season_number":null,"release_year":null,"thumbnail_url":null}"#;

fn config_for(server: &mockito::ServerGuard) -> RuntimeConfig {
    RuntimeConfig::resolve(
        &AppSettings::default(),
        &Overrides {
            api_base: Some(format!("{}/api", server.url())),
            ..Overrides::default()
        },
    )
}

async fn wait_for(
    rx: &mut mpsc::Receiver<AppEvent>,
    mut pred: impl FnMut(&AppSnapshot) -> bool,
) -> AppSnapshot {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match rx.recv().await {
                Some(AppEvent::State(s)) if pred(&s) => return *s,
                Some(_) => {}
                None => panic!("app actor stopped"),
            }
        }
    })
    .await
    .expect("timed out waiting for state")
}

#[tokio::test]
async fn map_to_guide_to_schedule() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/init-data")
        .with_body(r#"{"message":"Sample data initialized successfully"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/regions")
        .with_body(r#"[{"region":"europe","channel_count":1},{"region":"asia","channel_count":4}]"#)
        .create_async()
        .await;
    let channels = server
        .mock("GET", "/api/channels")
        .match_query(Matcher::UrlEncoded("region".into(), "europe".into()))
        .with_body(format!("[{CHANNEL}]"))
        .create_async()
        .await;
    server
        .mock("GET", "/api/live-guide")
        .match_query(Matcher::UrlEncoded("region".into(), "europe".into()))
        .with_body(format!(
            r#"[{{"channel":{CHANNEL},"current_program":{PROGRAM},"next_program":null,"current_start_time":"2025-03-01T10:00:00","current_end_time":"2025-03-01T11:00:00","next_start_time":null,"progress_percentage":50.0,"time_remaining_minutes":30}}]"#
        ))
        .create_async()
        .await;
    let schedule = server
        .mock("GET", "/api/schedule/c1")
        .match_query(Matcher::UrlEncoded("hours".into(), "48".into()))
        .with_body(format!(
            r#"[{{"id":"s1","channel_id":"c1","start_time":"2025-03-01T10:00:00","end_time":"2025-03-01T11:00:00","program":{PROGRAM}}}]"#
        ))
        .create_async()
        .await;

    let (tx, mut rx) = spawn_app_actor(config_for(&server));
    tx.send(AppCommand::Bootstrap).await.expect("send");

    let map = wait_for(&mut rx, |s| match &s.view_state {
        AppViewSnapshot::Map(m) => m.counts.get(RegionId::Asia) == 4,
        _ => false,
    })
    .await;
    let AppViewSnapshot::Map(m) = &map.view_state else {
        unreachable!()
    };
    assert_eq!(m.counts.get(RegionId::Europe), 1);
    assert_eq!(m.counts.get(RegionId::Africa), 0);

    tx.send(AppCommand::SelectRegion {
        region: RegionId::Europe,
    })
    .await
    .expect("send");
    let guide = wait_for(&mut rx, |s| {
        !s.loading && matches!(&s.view_state, AppViewSnapshot::Channels(g) if !g.rows.is_empty())
    })
    .await;
    assert_eq!(
        guide.nav,
        Navigation::Channels {
            region: RegionId::Europe
        }
    );
    assert_eq!(guide.breadcrumb(), "World > Europe");
    channels.assert_async().await;

    tx.send(AppCommand::GuideOpenSelected).await.expect("send");
    let detail = wait_for(&mut rx, |s| {
        !s.loading && matches!(&s.view_state, AppViewSnapshot::ChannelDetail(d) if !d.entries.is_empty())
    })
    .await;
    assert_eq!(
        detail.nav.selected_channel(),
        Some(&ChannelId::new("c1"))
    );
    schedule.assert_async().await;

    tx.send(AppCommand::Back).await.expect("send");
    let back = wait_for(&mut rx, |s| matches!(s.nav, Navigation::Channels { .. })).await;
    assert_eq!(back.nav.selected_region(), Some(RegionId::Europe));

    tx.send(AppCommand::Quit).await.expect("send");
}

#[tokio::test]
async fn failed_region_counts_leave_map_usable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/init-data")
        .with_status(500)
        .create_async()
        .await;
    server
        .mock("GET", "/api/regions")
        .with_status(503)
        .create_async()
        .await;

    let (tx, mut rx) = spawn_app_actor(config_for(&server));
    tx.send(AppCommand::Bootstrap).await.expect("send");

    let snap = wait_for(&mut rx, |s| s.status.starts_with("Could not load")).await;
    assert_eq!(snap.nav, Navigation::Map);
    assert!(!snap.loading);
    let AppViewSnapshot::Map(m) = &snap.view_state else {
        panic!("expected map view");
    };
    assert_eq!(m.counts.total(), 0);
}

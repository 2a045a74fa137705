use anyhow::{Context, Result};
use orphanage_client::api::HttpListingApi;
use orphanage_client::config::Config;
use orphanage_client::media::FileMediaLibrary;
use orphanage_client::navigation::Navigator;
use orphanage_client::screens::{ListingDataScreen, ListingsMapScreen, PositionSelector};
use orphanage_client::submission::DraftFile;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Orphanage Client");
    info!("===================");

    let config = Config::from_env()?;
    info!("API: {} ({:?} surface)", config.api_base_url, config.surface);
    info!("Tiles: {}", config.tile_url_template());

    let api = HttpListingApi::new(&config)?;
    let mut navigator = Navigator::new();
    let mut map = ListingsMapScreen::new();

    map.refresh(&api).await.context("Failed to fetch orphanages")?;
    print_map(&map);

    // Optional: register the listing described in a JSON draft file
    let Some(draft_path) = std::env::args().nth(1) else {
        return Ok(());
    };

    let file = DraftFile::load(&draft_path).await?;
    info!("Registering '{}' from {}", file.name, draft_path);

    navigator.navigate(map.start_registration());

    let mut selector = PositionSelector::new(config.viewport);
    if let Some((latitude, longitude)) = file.coordinates() {
        selector.tap_coordinates(latitude, longitude)?;
    }
    let route = selector.confirm().context("Draft file has no latitude/longitude")?;
    navigator.navigate(route.clone());

    let mut screen = ListingDataScreen::from_route(&route, &config)?;
    screen.edit(|draft| file.apply_fields(draft))?;

    let library = FileMediaLibrary::new(file.images.clone());
    while screen.add_images(&library).await? > 0 {}

    match screen.confirm(&api).await {
        Ok(submitted) => {
            info!("{}", submitted.message);
            navigator.navigate(submitted.next);
            map.refresh(&api).await.context("Failed to refresh orphanages")?;
            print_map(&map);
            Ok(())
        }
        Err(e) => {
            error!("❌ Registration failed, draft kept: {}", e);
            Err(e.into())
        }
    }
}

fn print_map(map: &ListingsMapScreen) {
    println!();
    println!("{}", map.summary());
    for marker in map.markers() {
        println!("  #{} {} ({}, {})", marker.id, marker.title, marker.latitude, marker.longitude);
    }
    println!();
}

use strava_summary::config::Settings;
use strava_summary::data_types::summary::stats::Metric;
use strava_summary::processors::cohort::CohortFilter;
use strava_summary::App;

const SETTINGS_FILE: &str = "summary.toml";

fn main() {
    let settings = match Settings::from_file(SETTINGS_FILE) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let app = match App::from_settings(&settings, SETTINGS_FILE) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    println!("Overview by sport & year");
    for row in app.overview() {
        println!(
            "{:<16} {:>4}  {:>12.1} m  {:>10.0} s  {:>9.1} m  {:>6.2} m/s",
            row.sport_type,
            row.year,
            row.total_distance_m,
            row.total_moving_time_s,
            row.total_elevation_gain_m,
            row.max_speed_mps
        );
    }

    println!();
    println!("Top 10 by distance");
    for record in app.top_activities(&CohortFilter::default(), Metric::Distance, 10) {
        println!(
            "{:<32} {:<12} {:>8.2} km",
            record.name, record.sport_type, record.distance_km
        );
    }
}

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use kundali_chart::{
    BirthPlace, Chart, ChartConfig, CompatibilityResult, DoshaReport, DoshaResult, GeoLocation,
    StaticGeocoder, build_dasha_sequence, classify_doshas, compute_chart, parse_date, parse_time,
    running_dasha, score_compatibility,
};
use kundali_vedic_base::{
    DashaPeriod, DashaSequence, antardashas, nakshatra_from_longitude, rashi_from_longitude,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic birth chart calculator")]
struct Cli {
    /// TOML file with chart settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Planetary positions, ascendant and houses
    Chart(BirthArgs),
    /// Manglik, Kaal Sarp and Sade Sati
    Doshas(BirthArgs),
    /// Vimshottari mahadashas from birth
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Also list the antardashas of each mahadasha
        #[arg(long)]
        antar: bool,
        /// Show the period running at this UTC instant (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Eight-kuta compatibility of two births
    Match {
        /// First birth: DATE,TIME,PLACE where PLACE is a city or LAT:LON:TZ
        #[arg(long, value_parser = parse_birth_entry)]
        first: BirthEntry,
        /// Second birth, same format
        #[arg(long, value_parser = parse_birth_entry)]
        second: BirthEntry,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

#[derive(Args)]
struct BirthArgs {
    /// Name recorded on the chart
    #[arg(long, default_value = "")]
    name: String,
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// Local clock time, HH:MM or HH:MM:SS
    #[arg(long)]
    time: String,
    /// City name (resolved from the built-in gazetteer)
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    place: Option<String>,
    /// Latitude in degrees, north positive
    #[arg(long, requires_all = ["lon", "tz"], allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, requires_all = ["lat", "tz"], allow_hyphen_values = true)]
    lon: Option<f64>,
    /// UTC offset in hours; required with --lat/--lon, overrides a place's offset
    #[arg(long, allow_hyphen_values = true)]
    tz: Option<f64>,
}

/// One side of a `match`.
#[derive(Clone)]
struct BirthEntry {
    date: String,
    time: String,
    place: BirthPlace,
}

fn parse_birth_entry(s: &str) -> Result<BirthEntry, String> {
    let mut parts = s.splitn(3, ',');
    let (Some(date), Some(time), Some(place)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected DATE,TIME,PLACE, got {s:?}"));
    };
    let coords: Vec<&str> = place.split(':').collect();
    let place = match coords.as_slice() {
        [lat, lon, tz] => {
            let num = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}"));
            let loc = GeoLocation::new(num(lat)?, num(lon)?, num(tz)?).map_err(|e| e.to_string())?;
            BirthPlace::Coordinates(loc)
        }
        _ => BirthPlace::Named(place.trim().to_owned()),
    };
    Ok(BirthEntry {
        date: date.trim().to_owned(),
        time: time.trim().to_owned(),
        place,
    })
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn load_config(path: Option<&PathBuf>) -> ChartConfig {
    match path {
        Some(p) => {
            let config = ChartConfig::load(p).unwrap_or_else(|e| fail(e));
            log::debug!("loaded config from {}", p.display());
            config
        }
        None => ChartConfig::default(),
    }
}

fn build_chart(
    name: &str,
    date: &str,
    time: &str,
    place: &BirthPlace,
    tz: Option<f64>,
    config: &ChartConfig,
) -> Chart {
    let date = parse_date(date).unwrap_or_else(|e| fail(e));
    let time = parse_time(time).unwrap_or_else(|e| fail(e));
    let geocoder = StaticGeocoder::with_indian_cities();
    compute_chart(name, date, time, place, tz, &geocoder, config).unwrap_or_else(|e| fail(e))
}

fn chart_from_args(args: &BirthArgs, config: &ChartConfig) -> Chart {
    let place = match (&args.place, args.lat, args.lon) {
        (Some(name), _, _) => BirthPlace::Named(name.clone()),
        (None, Some(lat), Some(lon)) => {
            let Some(tz) = args.tz else {
                fail("--lat/--lon need an explicit --tz");
            };
            BirthPlace::Coordinates(GeoLocation::new(lat, lon, tz).unwrap_or_else(|e| fail(e)))
        }
        _ => fail("give either --place or --lat, --lon and --tz"),
    };
    build_chart(&args.name, &args.date, &args.time, &place, args.tz, config)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());

    match cli.command {
        Commands::Chart(args) => {
            let chart = chart_from_args(&args, &config);
            if cli.json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Doshas(args) => {
            let chart = chart_from_args(&args, &config);
            let report = classify_doshas(&chart).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&report);
            } else {
                print_doshas(&report);
            }
        }

        Commands::Dasha { birth, antar, at } => {
            let chart = chart_from_args(&birth, &config);
            let seq = build_dasha_sequence(&chart).unwrap_or_else(|e| fail(e));
            let running = at.and_then(|t| running_dasha(&seq, t));
            if cli.json {
                #[derive(Serialize)]
                struct DashaOutput<'a> {
                    sequence: &'a DashaSequence,
                    #[serde(skip_serializing_if = "Vec::is_empty")]
                    antardashas: Vec<Vec<DashaPeriod>>,
                    #[serde(skip_serializing_if = "Option::is_none")]
                    running: Option<(DashaPeriod, Option<DashaPeriod>)>,
                }
                let subs = if antar {
                    seq.periods.iter().map(antardashas).collect()
                } else {
                    Vec::new()
                };
                print_json(&DashaOutput {
                    sequence: &seq,
                    antardashas: subs,
                    running,
                });
            } else {
                print_dasha(&seq, antar);
                if let Some(at) = at {
                    match running {
                        Some((maha, sub)) => {
                            print!("Running at {at}: {}", maha.lord.name());
                            if let Some(sub) = sub {
                                print!(" / {}", sub.lord.name());
                            }
                            println!();
                        }
                        None => println!("{at} is outside the dasha sequence"),
                    }
                }
            }
        }

        Commands::Match { first, second } => {
            let a = build_chart("first", &first.date, &first.time, &first.place, None, &config);
            let b = build_chart("second", &second.date, &second.time, &second.place, None, &config);
            let result = score_compatibility(&a, &b).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&result);
            } else {
                print_match(&a, &b, &result);
            }
        }

        Commands::Rashi { lon } => {
            if !lon.is_finite() {
                fail("longitude must be finite");
            }
            let info = rashi_from_longitude(lon);
            if cli.json {
                print_json(&info);
            } else {
                let dms = info.dms;
                println!(
                    "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                    info.rashi.name(),
                    info.rashi.western_name(),
                    dms.degrees,
                    dms.minutes,
                    dms.seconds,
                    info.degrees_in_rashi
                );
            }
        }

        Commands::Nakshatra { lon } => {
            if !lon.is_finite() {
                fail("longitude must be finite");
            }
            let info = nakshatra_from_longitude(lon);
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "{} (index {}) - Pada {} ({:.4} deg in nakshatra), lord {}",
                    info.nakshatra.name(),
                    info.nakshatra_index,
                    info.pada,
                    info.degrees_in_nakshatra,
                    info.nakshatra.lord().name()
                );
            }
        }
    }
}

fn print_chart(chart: &Chart) {
    let loc = chart.input.location;
    println!(
        "Birth: {} {:02}:{:02}:{:02} at {:.4}, {:.4} (UTC{:+})",
        format_date(chart),
        chart.input.time.hour,
        chart.input.time.minute,
        chart.input.time.second,
        loc.latitude,
        loc.longitude,
        loc.utc_offset_hours
    );
    println!("  Place source: {:?}", chart.place_source);
    println!("  JD (UT):      {:.6}", chart.julian_moment.jd());
    println!(
        "  Ayanamsha:    {:.6} deg ({})",
        chart.ayanamsha,
        chart.ayanamsha_system.name()
    );
    println!("  LST:          {:.4} deg", chart.local_sidereal_time);
    let asc = &chart.ascendant;
    println!(
        "  Ascendant:    {:.4} deg  {} {:.2}  {} pada {}{}",
        asc.longitude,
        asc.rashi.name(),
        asc.degree_in_sign,
        asc.nakshatra.name(),
        asc.pada,
        if asc.fallback { "  (fallback)" } else { "" }
    );
    println!();
    println!(
        "  {:<8} {:>10}  {:<12} {:>6}  {:<18} {:>4} {:>5}",
        "Graha", "Longitude", "Rashi", "Deg", "Nakshatra", "Pada", "House"
    );
    for b in &chart.bodies {
        println!(
            "  {:<8} {:>10.4}  {:<12} {:>6.2}  {:<18} {:>4} {:>5}{}",
            b.graha.name(),
            b.longitude,
            b.rashi.name(),
            b.degree_in_sign,
            b.nakshatra.name(),
            b.pada,
            b.house,
            if b.is_retrograde { "  R" } else { "" }
        );
    }
    println!();
    println!("  Houses (equal):");
    for h in &chart.houses {
        println!("    {:>2}: {:>9.4} deg  {}", h.house, h.longitude, h.rashi.name());
    }
    if let Some(cusps) = &chart.sripati_cusps {
        println!("  Houses (Sripati):");
        for h in cusps {
            println!("    {:>2}: {:>9.4} deg  {}", h.house, h.longitude, h.rashi.name());
        }
    }
}

fn format_date(chart: &Chart) -> String {
    let d = chart.input.date;
    format!("{:04}-{:02}-{:02}", d.year, d.month, d.day)
}

fn print_dosha(r: &DoshaResult, extra: &str) {
    println!(
        "{}: {}{}",
        r.dosha.name(),
        if r.present { "present" } else { "absent" },
        extra
    );
    println!("  {}", r.rationale);
    if r.present {
        for remedy in &r.remedies {
            println!("  - {remedy}");
        }
    }
}

fn print_doshas(report: &DoshaReport) {
    let m = &report.manglik;
    print_dosha(
        &m.result,
        &format!(
            " (Mars in house {} from lagna, {} from Moon)",
            m.mars_house_from_lagna, m.mars_house_from_moon
        ),
    );
    let k = &report.kaal_sarp;
    let arc = k.arc.map(|a| format!(" ({a:?})")).unwrap_or_default();
    print_dosha(&k.result, &arc);
    let s = &report.sade_sati;
    let phase = s
        .phase
        .map(|p| format!(" ({} phase)", p.name()))
        .unwrap_or_default();
    print_dosha(
        &s.result,
        &format!("{phase}, Saturn in house {} from Moon", s.saturn_house_from_moon),
    );
}

fn print_period(p: &DashaPeriod, indent: &str) {
    let date = |t: Option<DateTime<Utc>>| {
        t.map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "?".into())
    };
    println!(
        "{indent}{:<8} {} .. {}  {:>7.3} y",
        p.lord.name(),
        date(p.start_utc()),
        date(p.end_utc()),
        p.duration_years
    );
}

fn print_dasha(seq: &DashaSequence, antar: bool) {
    println!(
        "Vimshottari from {} (balance {:.4} y, {:.2}% of nakshatra elapsed)",
        seq.starting_lord.name(),
        seq.balance_years,
        seq.elapsed_fraction * 100.0
    );
    for p in &seq.periods {
        print_period(p, "  ");
        if antar {
            for sub in antardashas(p) {
                print_period(&sub, "      ");
            }
        }
    }
}

fn print_match(a: &Chart, b: &Chart, result: &CompatibilityResult) {
    for (label, chart) in [("First", a), ("Second", b)] {
        if let Ok(moon) = chart.moon() {
            println!(
                "{label} Moon: {} / {}",
                moon.rashi.name(),
                moon.nakshatra.name()
            );
        }
    }
    println!();
    for k in &result.kutas {
        println!(
            "  {:<12} {:>4.1} / {:<2}  {}",
            k.kuta.name(),
            k.points,
            k.max_points,
            k.detail
        );
    }
    println!();
    println!(
        "Total {:.1} / {} ({:.1}%): {}",
        result.total_points,
        result.max_points,
        result.percentage,
        result.band.name()
    );
    println!("{}", result.advice);
}

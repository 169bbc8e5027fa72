use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use kundali_base::dasha::{DashaSnapshot, snapshot_at, vimshottari};
use kundali_base::{
    SyllableScript, deg_to_dms, nakshatra_from_longitude, navamsa_rashi, panchanga_from_longitudes,
    rashi_from_longitude,
};
use kundali_chart::{
    BirthData, ChartError, DashaReport, EphemerisSnapshot, GeoLocation, KundaliReport,
    PanchangaReport, ReportOptions, StaticEphemeris, compute_kundali,
};
use kundali_config::KundaliConfig;
use kundali_time::{parse_local, parse_utc, utc_to_jd};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic birth chart, panchanga and dasha calculator")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScriptArg {
    Latin,
    Devanagari,
}

impl From<ScriptArg> for SyllableScript {
    fn from(s: ScriptArg) -> Self {
        match s {
            ScriptArg::Latin => SyllableScript::Latin,
            ScriptArg::Devanagari => SyllableScript::Devanagari,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Navamsa (D9) sign from sidereal longitude
    Navamsa {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Convert decimal degrees to degrees-minutes-seconds
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Panchanga from sidereal Sun and Moon longitudes
    Panchanga {
        /// Sidereal Sun longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        sun: f64,
        /// Sidereal Moon longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        moon: f64,
        /// Birth syllable script (defaults to config)
        #[arg(long)]
        script: Option<ScriptArg>,
    },
    /// Vimshottari dasha from Moon longitude and birth instant
    Dasha {
        /// Sidereal Moon longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        moon: f64,
        /// Birth instant, RFC 3339 (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        birth: String,
        /// Report only the periods active at this instant
        #[arg(long)]
        query: Option<String>,
    },
    /// Full kundali from a JSON ephemeris snapshot
    Kundali {
        /// JSON file with ascendant and graha longitudes
        #[arg(long)]
        input: PathBuf,
        /// Birth instant, RFC 3339 (overrides --date/--time/--tz)
        #[arg(long)]
        birth: Option<String>,
        /// Local birth date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Local birth time (hh:mm[:ss])
        #[arg(long)]
        time: Option<String>,
        /// IANA time zone of the local date/time
        #[arg(long)]
        tz: Option<String>,
        /// Latitude in degrees (north positive)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
}

#[derive(Serialize)]
struct SnapshotReport {
    query: String,
    mahadasha: DashaReport,
    antardasha: Option<DashaReport>,
}

impl SnapshotReport {
    fn new(query: String, s: &DashaSnapshot) -> Result<Self, ChartError> {
        Ok(Self {
            query,
            mahadasha: DashaReport::from_period(&s.mahadasha)?,
            antardasha: s
                .antardasha
                .as_ref()
                .map(DashaReport::from_period)
                .transpose()?,
        })
    }
}

fn report_options(config: &KundaliConfig) -> ReportOptions {
    ReportOptions {
        script: config.output.script,
        decimals: config.output.decimals,
        include_antardashas: config.dasha.include_antardashas,
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), ChartError> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{s}");
    Ok(())
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(command: Commands, config: &KundaliConfig) -> Result<(), ChartError> {
    let pretty = config.output.pretty;
    match command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada
            );
        }

        Commands::Navamsa { lon } => {
            let r = navamsa_rashi(lon);
            println!("{} (index {})", r.name(), r.index());
        }

        Commands::Dms { deg } => {
            println!("{}", deg_to_dms(deg));
        }

        Commands::Panchanga { sun, moon, script } => {
            let script = script.map(SyllableScript::from).unwrap_or(config.output.script);
            let record = panchanga_from_longitudes(moon, sun)?;
            print_json(&PanchangaReport::from_record(&record, script)?, pretty)?;
        }

        Commands::Dasha { moon, birth, query } => {
            let birth_jd = utc_to_jd(&parse_utc(&birth)?);
            let dashas = vimshottari(birth_jd, moon);
            match query {
                Some(q) => {
                    let query_jd = utc_to_jd(&parse_utc(&q)?);
                    match snapshot_at(&dashas, query_jd) {
                        Some(s) => print_json(&SnapshotReport::new(q, &s)?, pretty)?,
                        None => tracing::warn!("{q} is outside the dasha timeline"),
                    }
                }
                None => {
                    let reports = dashas
                        .iter()
                        .map(|m| DashaReport::from_mahadasha(m, config.dasha.include_antardashas))
                        .collect::<Result<Vec<_>, _>>()?;
                    print_json(&reports, pretty)?;
                }
            }
        }

        Commands::Kundali {
            input,
            birth,
            date,
            time,
            tz,
            lat,
            lon,
        } => {
            let utc = match (birth, date, time, tz) {
                (Some(b), _, _, _) => parse_utc(&b)?,
                (None, Some(d), Some(t), Some(z)) => parse_local(&d, &t, &z)?,
                _ => {
                    eprintln!("Provide --birth, or all of --date, --time and --tz");
                    std::process::exit(1);
                }
            };
            tracing::debug!("birth instant {utc}");
            let snapshot = EphemerisSnapshot::from_json_file(&input)?;
            let birth = BirthData {
                utc,
                location: GeoLocation::new(lat, lon)?,
            };
            let result = compute_kundali(&StaticEphemeris::new(snapshot), &birth)?;
            let report = KundaliReport::from_result(&result, &report_options(config))?;
            println!("{}", report.to_json(pretty)?);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let config = match KundaliConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };
    init_logging(&config.logging.level);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

use anyhow::{Context, Result};
use clap::{arg, ArgMatches, Command};
use lon_sampler::ils::{IlsConfig, IlsProblem, IlsRunner};
use lon_sampler::problems::{Knapsack, NumberPartitioning};
use lon_sampler::solution::Solution;
use lon_sampler::trajectory::TrajectoryLog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn cli() -> Command {
    Command::new("lon-sampler")
        .about("Samples local optima network trajectories with iterated local search")
        .arg(arg!(-f --file [FILE] "Knapsack instance file; omit to sample a number partitioning instance"))
        .arg(
            arg!(-r --runs [RUNS] "Number of independent runs")
                .default_value("100")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(-i --"non-improving" [ITERS] "Consecutive non-improving attempts before a run stops")
                .default_value("100")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(-s --seed [SEED] "Seed of the generator shared by all runs")
                .default_value("42")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--items [N] "Number partitioning: item count")
                .default_value("20")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--ratio [K] "Number partitioning: magnitude exponent ratio")
                .default_value("0.5")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"instance-seed" [SEED] "Number partitioning: instance generation seed")
                .default_value("1")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(arg!(--best "Use best improvement instead of first improvement"))
}

/// One ILS run: fresh random bitstring, shared rng, trajectory
/// collected in memory and returned as the archive member's bytes.
fn sample_run<P, R>(problem: &P, config: &IlsConfig, rng: &mut R) -> Result<Vec<u8>>
where
    P: IlsProblem,
    R: Rng,
{
    let mut sol = Solution::rnd_bitstring(problem.dimension(), rng);
    problem.full_eval(&mut sol);
    println!("{sol}");

    let mut log = TrajectoryLog::new(Vec::new());
    IlsRunner::run_with_rng(problem, sol, config, rng, &mut log)?;
    Ok(log.finish()?)
}

fn sample_batch<P>(problem: &P, zipname: &str, runs: usize, config: &IlsConfig, seed: u64) -> Result<()>
where
    P: IlsProblem + Display,
{
    println!("{problem}");

    let mut rng = StdRng::seed_from_u64(seed);
    let archive =
        File::create(zipname).with_context(|| format!("cannot create archive {zipname}"))?;
    let mut zip = ZipWriter::new(archive);

    for run in 1..=runs {
        let bytes = sample_run(problem, config, &mut rng)
            .with_context(|| format!("run {run} failed"))?;
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.start_file(format!("run{run}.dat"), options)
            .with_context(|| format!("cannot add run {run} to {zipname}"))?;
        zip.write_all(&bytes)
            .with_context(|| format!("cannot write run {run} to {zipname}"))?;
    }

    zip.finish()
        .with_context(|| format!("cannot finalize {zipname}"))?;
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<()> {
    let runs = *matches.get_one::<usize>("runs").unwrap();
    let non_improving = *matches.get_one::<usize>("non-improving").unwrap();
    let seed = *matches.get_one::<u64>("seed").unwrap();
    let config = IlsConfig::default()
        .with_non_improving_iters(non_improving)
        .with_first_improvement(!matches.get_flag("best"));

    match matches.get_one::<String>("file") {
        Some(file) => {
            let problem = Knapsack::from_file(file)?;
            let zipname = format!("{file}.runs.zip");
            sample_batch(&problem, &zipname, runs, &config, seed)
        }
        None => {
            let problem = NumberPartitioning::new(
                *matches.get_one::<usize>("items").unwrap(),
                *matches.get_one::<f64>("ratio").unwrap(),
                *matches.get_one::<u64>("instance-seed").unwrap(),
            );
            sample_batch(&problem, "runs.zip", runs, &config, seed)
        }
    }
}

fn main() -> Result<()> {
    run(&cli().get_matches())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::api::classify;
use planar::geom2::{do_intersect_cfg, GeomCfg, Point2, Segment2};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Orientation and segment-intersection queries")]
struct Cmd {
    /// Collinearity tolerance on the orientation value (0 = exact sign)
    #[arg(long, default_value_t = 0.0)]
    eps: f64,

    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify the turn a→b→c
    Orient {
        #[arg(long, allow_hyphen_values = true)]
        a: Point2,
        #[arg(long, allow_hyphen_values = true)]
        b: Point2,
        #[arg(long, allow_hyphen_values = true)]
        c: Point2,
    },
    /// Print S if [a,b] and [c,d] intersect, N otherwise
    Intersect {
        #[arg(long, allow_hyphen_values = true)]
        a: Point2,
        #[arg(long, allow_hyphen_values = true)]
        b: Point2,
        #[arg(long, allow_hyphen_values = true)]
        c: Point2,
        #[arg(long, allow_hyphen_values = true)]
        d: Point2,
    },
    /// Answer a JSON file of segment pairs and write results plus a provenance sidecar
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

/// One query of a batch file.
#[derive(Debug, Deserialize)]
struct PairQuery {
    s: Segment2,
    t: Segment2,
}

#[derive(Debug, Serialize)]
struct PairAnswer {
    s: Segment2,
    t: Segment2,
    intersects: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = GeomCfg::with_eps(cmd.eps);
    match cmd.action {
        Action::Orient { a, b, c } => {
            println!("{}", orient_line(a, b, c, &cfg));
            Ok(())
        }
        Action::Intersect { a, b, c, d } => {
            println!("{}", intersect_mark(a, b, c, d, &cfg));
            Ok(())
        }
        Action::Batch { input, out } => batch(&input, &out, &cfg, cmd.tag).map(|_| ()),
        Action::Report => report(&cfg, cmd.tag),
    }
}

fn orient_line(a: Point2, b: Point2, c: Point2, cfg: &GeomCfg) -> String {
    let (value, class) = classify(a, b, c, cfg);
    tracing::info!(%a, %b, %c, value, %class, "orient");
    format!("{value} {class}")
}

fn intersect_mark(a: Point2, b: Point2, c: Point2, d: Point2, cfg: &GeomCfg) -> &'static str {
    let hit = do_intersect_cfg(a, b, c, d, cfg);
    tracing::info!(%a, %b, %c, %d, hit, "intersect");
    if hit {
        "S"
    } else {
        "N"
    }
}

/// Returns the number of intersecting pairs.
fn batch(input: &str, out: &str, cfg: &GeomCfg, tag: Option<String>) -> Result<usize> {
    tracing::info!(input, out, eps = cfg.eps_collinear, tag = ?tag, "batch");
    let raw = std::fs::read(input).with_context(|| format!("reading {input}"))?;
    let queries: Vec<PairQuery> =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {input}"))?;

    let answers: Vec<PairAnswer> = queries
        .into_iter()
        .map(|q| PairAnswer {
            intersects: q.s.intersects_cfg(&q.t, cfg),
            s: q.s,
            t: q.t,
        })
        .collect();
    let hits = answers.iter().filter(|a| a.intersects).count();
    tracing::info!(pairs = answers.len(), hits, "batch_done");

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&answers)?)
        .with_context(|| format!("writing {out}"))?;

    provenance::BatchRun {
        input,
        eps_collinear: cfg.eps_collinear,
        pairs: answers.len(),
        hits,
        tag,
    }
    .write_next_to(out_path)?;
    Ok(hits)
}

fn report(cfg: &GeomCfg, tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": planar::VERSION,
        "tag": tag,
        "params": { "eps": cfg.eps_collinear },
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

mod input;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hull2d::prelude::*;
use provenance::{HullSummary, Run};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner and demonstrations")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the square and triangle demonstrations in both modes
    Demo,
    /// Hull of points read from a CSV (columns x,y) or JSON file
    Hull {
        #[arg(long)]
        input: PathBuf,
        /// Write the JSON report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        mode: ModeArgs,
    },
    /// Hull of a seeded random point cloud
    Random {
        #[arg(long, value_enum, default_value_t = Cloud::Disk)]
        cloud: Cloud,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Disk radius, square half-width, lattice side, or segment extent
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        mode: ModeArgs,
    },
}

#[derive(Args, Clone, Copy, Debug)]
struct ModeArgs {
    /// Keep points lying on hull edges, not only corners
    #[arg(long)]
    collinear: bool,
    /// Turns with |cross| <= eps count as collinear
    #[arg(long, default_value_t = 1e-12)]
    eps: f64,
}

impl From<ModeArgs> for HullCfg {
    fn from(m: ModeArgs) -> Self {
        HullCfg {
            include_collinear: m.collinear,
            eps: m.eps,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Cloud {
    Disk,
    Square,
    Grid,
    Segment,
}

impl Cloud {
    fn with_scale(self, scale: f64) -> Result<PointCloud> {
        if !scale.is_finite() {
            bail!("--scale must be finite, got {}", scale);
        }
        Ok(match self {
            Cloud::Disk => PointCloud::Disk { radius: scale },
            Cloud::Square => PointCloud::Square { half_width: scale },
            Cloud::Grid => PointCloud::Grid {
                side: scale.max(1.0) as u32,
            },
            Cloud::Segment => PointCloud::Segment {
                from: Vec2::zeros(),
                to: Vec2::new(scale, scale),
            },
        })
    }
}

/// JSON report printed or written by `hull` and `random`.
#[derive(Debug, Serialize)]
struct HullReport {
    #[serde(flatten)]
    summary: HullSummary,
    hull: Vec<[f64; 2]>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo(),
        Action::Hull { input, out, mode } => hull(input, out, mode.into(), cmd.tag),
        Action::Random {
            cloud,
            count,
            seed,
            index,
            scale,
            out,
            mode,
        } => random(
            cloud.with_scale(scale)?,
            count,
            ReplayToken { seed, index },
            out,
            mode.into(),
            cmd.tag,
        ),
    }
}

fn demo() -> Result<()> {
    let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)];
    let triangle = [
        (0.0, 0.0),
        (3.0, 0.0),
        (0.0, 3.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (0.0, 1.0),
        (0.0, 2.0),
    ];
    for (name, pts) in [("square", &square[..]), ("triangle", &triangle[..])] {
        let corners = convex_hull(pts, HullCfg::corners())?;
        let edges = convex_hull(pts, HullCfg::with_edges())?;
        println!("{name} corners only: {}", fmt_points(&corners));
        println!("{name} with edge points: {}", fmt_points(&edges));
    }
    Ok(())
}

fn hull(input: PathBuf, out: Option<PathBuf>, cfg: HullCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), include_collinear = cfg.include_collinear, eps = cfg.eps, tag = ?tag, "hull");
    let points = input::read_points(&input)?;
    let rep = report(&points, cfg)?;
    let run = Run {
        command: "hull",
        params: json!({ "input": input.to_string_lossy() }),
        tag,
    };
    emit(&rep, out.as_deref(), &run)
}

fn random(
    cloud: PointCloud,
    count: usize,
    tok: ReplayToken,
    out: Option<PathBuf>,
    cfg: HullCfg,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(cloud = ?cloud, count, seed = tok.seed, index = tok.index, tag = ?tag, "random");
    let points: Vec<[f64; 2]> = draw_points(cloud, count, tok)
        .iter()
        .map(|p| [p.x, p.y])
        .collect();
    let rep = report(&points, cfg)?;
    let run = Run {
        command: "random",
        params: json!({
            "cloud": format!("{cloud:?}"),
            "count": count,
            "seed": tok.seed,
            "index": tok.index
        }),
        tag,
    };
    emit(&rep, out.as_deref(), &run)
}

fn report(points: &[[f64; 2]], cfg: HullCfg) -> Result<HullReport> {
    let hull = convex_hull(points, cfg)?;
    tracing::info!(n_input = points.len(), n_hull = hull.len(), "hull_done");
    Ok(HullReport {
        summary: HullSummary {
            n_input: points.len(),
            n_hull: hull.len(),
            include_collinear: cfg.include_collinear,
            eps: cfg.eps,
        },
        hull: hull.iter().map(|p| [p.x, p.y]).collect(),
    })
}

fn emit(rep: &HullReport, out: Option<&Path>, run: &Run) -> Result<()> {
    let body = serde_json::to_string_pretty(rep)?;
    let Some(out_path) = out else {
        println!("{body}");
        return Ok(());
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, body).with_context(|| format!("writing {}", out_path.display()))?;
    let prov = provenance::write_sidecar(out_path, run, rep.summary)?;
    tracing::info!(out = %out_path.display(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn fmt_points(pts: &[Point]) -> String {
    let inner: Vec<String> = pts.iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
    format!("[{}]", inner.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_flags_into_hull_cfg() {
        let cmd = Cmd::try_parse_from([
            "cli", "--tag", "t1", "hull", "--input", "pts.csv", "--collinear", "--eps", "0",
        ])
        .unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("t1"));
        match cmd.action {
            Action::Hull { input, out, mode } => {
                assert_eq!(input, PathBuf::from("pts.csv"));
                assert!(out.is_none());
                let cfg: HullCfg = mode.into();
                assert!(cfg.include_collinear);
                assert_eq!(cfg.eps, 0.0);
            }
            _ => panic!("expected hull"),
        }
        let cmd = Cmd::try_parse_from(["cli", "random", "--cloud", "grid"]).unwrap();
        match cmd.action {
            Action::Random { cloud, mode, .. } => {
                assert_eq!(cloud, Cloud::Grid);
                assert_eq!(HullCfg::from(mode), HullCfg::default());
            }
            _ => panic!("expected random"),
        }
    }

    #[test]
    fn report_for_triangle_with_edge_points() {
        let pts = [
            [0.0, 0.0],
            [3.0, 0.0],
            [0.0, 3.0],
            [1.0, 0.0],
            [2.0, 0.0],
            [0.0, 1.0],
            [0.0, 2.0],
        ];
        let corners = report(&pts, HullCfg::corners()).unwrap();
        assert_eq!(corners.summary.n_input, 7);
        assert_eq!(corners.hull, vec![[0.0, 0.0], [3.0, 0.0], [0.0, 3.0]]);
        let edges = report(&pts, HullCfg::with_edges()).unwrap();
        assert_eq!(edges.summary.n_hull, 7);
    }

    #[test]
    fn report_rejects_non_finite() {
        let err = report(&[[f64::NAN, 0.0]], HullCfg::default()).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn emit_writes_report_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("runs").join("hull.json");
        let rep = report(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], HullCfg::default()).unwrap();
        let run = Run {
            command: "random",
            params: json!({"cloud": "Disk"}),
            tag: Some("x".into()),
        };
        emit(&rep, Some(out.as_path()), &run).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["n_hull"], 3);
        assert_eq!(parsed["hull"][1], json!([1.0, 0.0]));
        let sidecar = dir.path().join("runs").join("hull.provenance.json");
        let prov: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["hull"]["n_hull"], 3);
        assert_eq!(prov["command"], "random");
    }

    #[test]
    fn segment_cloud_spans_the_diagonal() {
        match Cloud::Segment.with_scale(2.0).unwrap() {
            PointCloud::Segment { from, to } => {
                assert_eq!(from, Vec2::new(0.0, 0.0));
                assert_eq!(to, Vec2::new(2.0, 2.0));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            Cloud::Grid.with_scale(0.2).unwrap(),
            PointCloud::Grid { side: 1 }
        );
    }

    #[test]
    fn non_finite_scale_is_an_error() {
        for scale in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            for cloud in [Cloud::Disk, Cloud::Square, Cloud::Grid, Cloud::Segment] {
                let err = cloud.with_scale(scale).unwrap_err();
                assert!(err.to_string().contains("--scale"));
            }
        }
        let cmd = Cmd::try_parse_from(["cli", "random", "--cloud", "square", "--scale", "NaN"])
            .unwrap();
        match cmd.action {
            Action::Random { cloud, scale, .. } => assert!(cloud.with_scale(scale).is_err()),
            _ => panic!("expected random"),
        }
    }

    #[test]
    fn demo_formats_points() {
        let s = fmt_points(&[Vec2::new(0.0, 0.0), Vec2::new(1.5, 2.0)]);
        assert_eq!(s, "[(0, 0), (1.5, 2)]");
        demo().unwrap();
    }
}

//! Test matrix configuration: structured spec parsing and partitioning.
//!
//! A test specification is either an existing graph file or a set of
//! generation parameters. The textual form is strict by design: a comma in
//! the string means exactly six positional fields
//! (`scale,degree,generator,edge-weighting,vertex-weighting,direction`);
//! anything else is a file path. Nothing is evaluated, only parsed.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;
use crate::log;

// =============================================================================
// Graph properties
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Directed,
    Undirected,
}

impl Direction {
    pub fn as_arg(&self) -> &'static str {
        match self {
            Direction::Directed => "directed",
            Direction::Undirected => "undirected",
        }
    }

    /// Short token understood by the round-trip test executable.
    pub fn short(&self) -> &'static str {
        match self {
            Direction::Directed => "d",
            Direction::Undirected => "u",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directed" | "d" => Ok(Direction::Directed),
            "undirected" | "u" => Ok(Direction::Undirected),
            other => Err(format!("unknown direction `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    Weighted,
    Unweighted,
}

impl Weighting {
    pub fn as_arg(&self) -> &'static str {
        match self {
            Weighting::Weighted => "weighted",
            Weighting::Unweighted => "unweighted",
        }
    }

    pub fn short(&self) -> &'static str {
        match self {
            Weighting::Weighted => "w",
            Weighting::Unweighted => "uw",
        }
    }
}

impl FromStr for Weighting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weighted" | "w" => Ok(Weighting::Weighted),
            "unweighted" | "uw" => Ok(Weighting::Unweighted),
            other => Err(format!("unknown weighting `{other}`")),
        }
    }
}

// =============================================================================
// Generation specs
// =============================================================================

/// Parameters fully determining a synthetically generated graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenSpec {
    /// Vertex count is `2^scale`.
    pub scale: u32,
    /// Target edge count is `vertices × degree`.
    pub degree: u32,
    /// Generator kind, e.g. `erdos_renyi`.
    pub generator: String,
    pub edge_weighting: Weighting,
    pub vertex_weighting: Weighting,
    pub direction: Direction,
}

impl GenSpec {
    pub fn vertices(&self) -> u64 {
        1u64 << self.scale
    }

    /// Saturates at `u64::MAX`; the parser admits scales up to 63, where the
    /// product no longer fits.
    pub fn edges(&self) -> u64 {
        self.vertices().saturating_mul(u64::from(self.degree))
    }

    /// Deterministic identity carried on report rows and artifact names.
    pub fn graph_name(&self) -> String {
        format!(
            "generated_scale{}_degree{}_{}",
            self.scale, self.degree, self.generator
        )
    }

    pub fn artifact_filename(&self) -> String {
        format!("{}.el", self.graph_name())
    }

    /// The `--flag value` pairs every toolchain executable understands.
    pub fn generation_args(&self) -> Vec<String> {
        vec![
            "--scale".to_string(),
            self.scale.to_string(),
            "--degree".to_string(),
            self.degree.to_string(),
            "--gen-type".to_string(),
            self.generator.clone(),
            "--edge-type".to_string(),
            self.edge_weighting.as_arg().to_string(),
            "--vertex-type".to_string(),
            self.vertex_weighting.as_arg().to_string(),
            "--graph-type".to_string(),
            self.direction.as_arg().to_string(),
        ]
    }
}

// =============================================================================
// Test specifications
// =============================================================================

/// One entry of the test matrix: exactly one of the two variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestSpec {
    ExistingFile(PathBuf),
    Generated(GenSpec),
}

impl FromStr for TestSpec {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains(',') {
            return Ok(TestSpec::ExistingFile(PathBuf::from(s)));
        }

        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != 6 {
            return Err(invalid(
                s,
                "expected 6 comma-separated fields: \
                 scale,degree,generator,edge-weighting,vertex-weighting,direction",
            ));
        }

        let scale: u32 = fields[0]
            .parse()
            .map_err(|_| invalid(s, "scale must be a non-negative integer"))?;
        if scale >= 64 {
            return Err(invalid(s, "scale must be below 64"));
        }
        let degree: u32 = fields[1]
            .parse()
            .map_err(|_| invalid(s, "degree must be a non-negative integer"))?;
        if fields[2].is_empty() {
            return Err(invalid(s, "generator kind must not be empty"));
        }
        let edge_weighting = fields[3].parse().map_err(|e: String| invalid(s, &e))?;
        let vertex_weighting = fields[4].parse().map_err(|e: String| invalid(s, &e))?;
        let direction = fields[5].parse().map_err(|e: String| invalid(s, &e))?;

        Ok(TestSpec::Generated(GenSpec {
            scale,
            degree,
            generator: fields[2].to_string(),
            edge_weighting,
            vertex_weighting,
            direction,
        }))
    }
}

fn invalid(input: &str, reason: &str) -> HarnessError {
    HarnessError::InvalidSpec {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Built-in matrices
// =============================================================================

/// The stock test matrix: the two bundled mini graphs plus erdos_renyi
/// generation specs from small to large.
pub fn default_specs(project_root: &Path) -> Vec<TestSpec> {
    let graphs = project_root.join("graphs");
    let mut specs = vec![
        TestSpec::ExistingFile(graphs.join("mini.el")),
        TestSpec::ExistingFile(graphs.join("mini_d.el")),
    ];
    for scale in [8, 12, 16, 18, 20] {
        specs.push(TestSpec::Generated(GenSpec {
            scale,
            degree: 4,
            generator: "erdos_renyi".to_string(),
            edge_weighting: Weighting::Unweighted,
            vertex_weighting: Weighting::Unweighted,
            direction: Direction::Directed,
        }));
    }
    specs
}

/// Extension point: register extra graph files to benchmark alongside the
/// stock matrix. Included when the driver is run with `--use-user-graphs`.
pub fn user_graph_specs(_project_root: &Path) -> Vec<TestSpec> {
    Vec::new()
}

// =============================================================================
// Partitioning
// =============================================================================

/// Split specs into existence-checked file paths and generation specs,
/// preserving input order within each partition.
///
/// Missing files are dropped with a warning; they never fail the run.
pub fn partition(specs: &[TestSpec]) -> (Vec<PathBuf>, Vec<GenSpec>) {
    let mut files = Vec::new();
    let mut generated = Vec::new();
    for spec in specs {
        match spec {
            TestSpec::ExistingFile(path) => {
                if path.exists() {
                    files.push(path.clone());
                } else {
                    log::warning(&format!(
                        "graph file not found, skipping: {}",
                        path.display()
                    ));
                }
            }
            TestSpec::Generated(gen) => generated.push(gen.clone()),
        }
    }
    (files, generated)
}

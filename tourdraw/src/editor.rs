use log::{debug, info, warn};
use serde::Serialize;

use crate::algorithms::cost::{cost_display, total_cost};
use crate::algorithms::selection::{ClickOutcome, Selection, SelectionController};
use crate::algorithms::tour_check::TourShape;
use crate::config::{EditorConfig, TourMode};
use crate::error::Result;
use crate::geometry::rescale::rescale;
use crate::model::Node;
use crate::presets::Preset;
use crate::{tsplib, Graph, Pick};

/// Cost as the display should show it after an edit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostReadout {
    pub total: f64,
    /// Two-decimal text, or `None` while the edges do not form the tour
    /// shape the current mode requires.
    pub display: Option<String>,
}

/// One editing session: the graph, the pending selection and the settings.
#[derive(Clone, Debug, Default)]
pub struct Editor {
    graph: Graph,
    selection: SelectionController,
    config: EditorConfig,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Editor { config, ..Self::default() })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EditorConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: TourMode) {
        self.config.mode = mode;
    }

    pub fn selection(&self) -> Selection {
        self.selection.state()
    }

    pub fn pending(&self) -> Option<&str> {
        self.selection.pending(&self.graph)
    }

    // Loading

    /// Start over from a literal node list, positions taken as given.
    pub fn seed(&mut self, nodes: Vec<Node>) -> Result<()> {
        self.graph.replace_nodes(nodes)?;
        self.selection.clear();
        info!("seeded {} nodes", self.graph.node_count());
        Ok(())
    }

    pub fn load_preset(&mut self, preset: Preset) -> Result<()> {
        self.seed(preset.nodes())
    }

    /// Replace the node set with the contents of a TSPLIB file, fitted to the
    /// viewport when configured. Returns the instance `NAME`, if any. On
    /// error the current graph is kept.
    pub fn load_tsplib(&mut self, content: &str) -> Result<Option<String>> {
        let mut inst = tsplib::parse(content).map_err(|e| {
            warn!("rejected TSPLIB load: {}", e);
            e
        })?;
        if self.config.rescale_on_load {
            rescale(&mut inst.nodes, &self.config.viewport);
        }
        self.graph.replace_nodes(inst.nodes)?;
        self.selection.clear();
        info!(
            "loaded {} nodes from {}",
            self.graph.node_count(),
            inst.name.as_deref().unwrap_or("unnamed instance")
        );
        Ok(inst.name)
    }

    pub fn load_json(&mut self, v: serde_json::Value) -> Result<()> {
        self.graph.from_json_value(v)?;
        self.selection.clear();
        info!(
            "restored {} nodes, {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        Ok(())
    }

    // Input events

    pub fn click_node(&mut self, id: &str) -> Result<ClickOutcome> {
        self.selection.click_node(&mut self.graph, id)
    }

    pub fn click_edge(&mut self, edge: u32) -> Result<ClickOutcome> {
        self.selection.click_edge(&mut self.graph, edge)
    }

    /// Route a pointer click to whatever lies under it: a node if one is
    /// within the pick tolerance, else an edge, else nothing.
    pub fn click_at(&mut self, x: f64, y: f64) -> Result<Option<ClickOutcome>> {
        match self.graph.pick(x, y, self.config.pick_tolerance) {
            Some(Pick::Node { id, .. }) => self.click_node(&id).map(Some),
            Some(Pick::Edge { id, .. }) => self.click_edge(id).map(Some),
            None => Ok(None),
        }
    }

    /// Clear all edges and the pending node; nodes stay where they are.
    pub fn reset(&mut self) {
        self.selection.reset(&mut self.graph);
        info!("reset: {} nodes kept", self.graph.node_count());
    }

    // Readout

    pub fn cost(&self) -> f64 {
        total_cost(&self.graph)
    }

    pub fn cost_readout(&self) -> CostReadout {
        let readout = CostReadout {
            total: self.cost(),
            display: cost_display(&self.graph, self.config.mode),
        };
        debug!("cost {:?} ({:?})", readout.display, self.config.mode);
        readout
    }

    pub fn shape(&self) -> TourShape {
        TourShape::classify(&self.graph)
    }
}

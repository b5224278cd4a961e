use serde::Serialize;

use crate::model::{
    rating_graph::RatingGraph,
    structures::{what_if_outcome::WhatIfOutcome, Elo}
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeGroup {
    Driver,
    Constructor
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ElementData {
    Node {
        id: String,
        label: String,
        group: NodeGroup,
        elo: Elo
    },
    Edge {
        id: String,
        source: String,
        target: String
    }
}

/// One element of the graph view: a node or an edge plus its style class
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GraphElement {
    pub data: ElementData,
    pub classes: &'static str
}

/// Everything the graph view needs: the elements and the simulations applied
/// so far.
#[derive(Serialize, Debug, Clone)]
pub struct GraphExport {
    pub elements: Vec<GraphElement>,
    pub simulations: Vec<WhatIfOutcome>
}

pub fn driver_node_id(name: &str) -> String {
    format!("driver-{}", name)
}

pub fn constructor_node_id(name: &str) -> String {
    format!("constructor-{}", name)
}

/// Drivers first, then constructors, then edges, each in insertion order.
pub fn graph_elements(graph: &RatingGraph) -> Vec<GraphElement> {
    let drivers = graph.drivers().map(|driver| GraphElement {
        data: ElementData::Node {
            id: driver_node_id(&driver.name),
            label: driver.name.clone(),
            group: NodeGroup::Driver,
            elo: driver.overall_rating
        },
        classes: "driver-node"
    });

    let constructors = graph.constructors().map(|constructor| GraphElement {
        data: ElementData::Node {
            id: constructor_node_id(&constructor.name),
            label: constructor.name.clone(),
            group: NodeGroup::Constructor,
            elo: constructor.overall_rating
        },
        classes: "constructor-node"
    });

    let edges = graph.edges().map(|(driver, constructor, kind)| GraphElement {
        data: ElementData::Edge {
            id: format!("{}-{}-{}", kind.id_prefix(), driver.name, constructor.name),
            source: driver_node_id(&driver.name),
            target: constructor_node_id(&constructor.name)
        },
        classes: kind.class()
    });

    drivers.chain(constructors).chain(edges).collect()
}

pub fn graph_export(graph: &RatingGraph, simulations: Vec<WhatIfOutcome>) -> GraphExport {
    GraphExport {
        elements: graph_elements(graph),
        simulations
    }
}

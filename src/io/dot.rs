//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw nodes and edges, with
//! bipartite graphs rendered as two dotted clusters.
//!
//! How a node or edge is rendered is controlled by *decorator* callbacks mapping a vertex (or an
//! edge with its weight) to an identifier plus a list of Dot attributes. Identifier-only defaults
//! based on [`Display`] are provided, so in the simplest case
//! ```
//! use wgraphs::{io::DotWriter, prelude::*};
//!
//! let g = Graph::<i32, i64>::from_edges([(1, 2), (2, 3)]);
//! let mut out = Vec::new();
//! DotWriter::default().try_write_graph(&g, &mut out).unwrap();
//! ```
//! suffices. The writer only reads the vertex sets and the weight table.

use std::{
    fmt::Display,
    io::{Result, Write},
};

use crate::{
    ops::WeightTable,
    repr::{Bigraph, Graph},
    vertex::Vertex,
    weight::EdgeWeight,
};

/// How one node is rendered: its Dot identifier plus attributes
#[derive(Debug, Clone)]
pub struct DotNode {
    pub id: String,
    pub attrs: Vec<(String, String)>,
}

impl DotNode {
    /// Creates an attribute-less node with the given identifier
    pub fn new<S>(id: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            id: id.into(),
            attrs: Vec::new(),
        }
    }

    /// Adds an attribute, e.g. `("color", "red")`
    pub fn attr<K, Val>(mut self, key: K, value: Val) -> Self
    where
        K: Into<String>,
        Val: Into<String>,
    {
        self.attrs.push((key.into(), value.into()));
        self
    }
}

/// How one edge is rendered: both endpoint identifiers plus attributes
#[derive(Debug, Clone)]
pub struct DotEdge {
    pub from: String,
    pub to: String,
    pub attrs: Vec<(String, String)>,
}

impl DotEdge {
    /// Creates an attribute-less edge between two identifiers
    pub fn new<S, T>(from: S, to: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            from: from.into(),
            to: to.into(),
            attrs: Vec::new(),
        }
    }

    /// Adds an attribute, e.g. `("label", "3")`
    pub fn attr<K, Val>(mut self, key: K, value: Val) -> Self
    where
        K: Into<String>,
        Val: Into<String>,
    {
        self.attrs.push((key.into(), value.into()));
        self
    }
}

fn format_attrs(attrs: &[(String, String)]) -> String {
    if attrs.is_empty() {
        return String::new();
    }

    let rendered: Vec<String> = attrs
        .iter()
        .map(|(key, value)| format!("{key}=\"{value}\""))
        .collect();
    format!(" [{}]", rendered.join(", "))
}

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Name of the produced graph (default: "G")
    graph_name: String,
    /// Wrap the two sides of a bipartite graph in `cluster_` subgraphs so
    /// layout engines keep them separated (default: true)
    clustered: bool,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            graph_name: "G".to_string(),
            clustered: true,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the produced graph
    pub fn graph_name<S>(mut self, name: S) -> Self
    where
        S: Into<String>,
    {
        self.graph_name = name.into();
        self
    }

    /// If *false*, the two sides of a bipartite graph are written as plain
    /// subgraphs instead of clusters
    pub fn clustered(mut self, clustered: bool) -> Self {
        self.clustered = clustered;
        self
    }

    /// Writes a bipartite graph using `Display`-based identifiers and no
    /// attributes.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn try_write_bigraph<U, V, W, Wr>(&self, graph: &Bigraph<U, V, W>, writer: Wr) -> Result<()>
    where
        U: Vertex + Display,
        V: Vertex + Display,
        W: EdgeWeight,
        Wr: Write,
    {
        self.try_write_bigraph_with(
            graph,
            writer,
            |u| DotNode::new(u.to_string()),
            |v| DotNode::new(v.to_string()),
            |u, v, _| DotEdge::new(u.to_string(), v.to_string()),
        )
    }

    /// Writes a bipartite graph with custom node and edge decorators.
    ///
    /// Identifiers returned by the edge decorator must match the ones the
    /// node decorators produce.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn try_write_bigraph_with<U, V, W, Wr, FU, FV, FE>(
        &self,
        graph: &Bigraph<U, V, W>,
        mut writer: Wr,
        mut unode_decorator: FU,
        mut vnode_decorator: FV,
        mut edge_decorator: FE,
    ) -> Result<()>
    where
        U: Vertex,
        V: Vertex,
        W: EdgeWeight,
        Wr: Write,
        FU: FnMut(&U) -> DotNode,
        FV: FnMut(&V) -> DotNode,
        FE: FnMut(&U, &V, &W) -> DotEdge,
    {
        let cluster_prefix = if self.clustered { "cluster_" } else { "" };

        writeln!(writer, "graph \"{}\" {{", self.graph_name)?;

        writeln!(writer, "  subgraph \"{cluster_prefix}U\" {{")?;
        writeln!(writer, "    style=dotted;")?;
        for u in graph.unodes() {
            let node = unode_decorator(u);
            writeln!(writer, "    \"{}\"{};", node.id, format_attrs(&node.attrs))?;
        }
        writeln!(writer, "  }}")?;

        writeln!(writer, "  subgraph \"{cluster_prefix}V\" {{")?;
        writeln!(writer, "    style=dotted;")?;
        for v in graph.vnodes() {
            let node = vnode_decorator(v);
            writeln!(writer, "    \"{}\"{};", node.id, format_attrs(&node.attrs))?;
        }
        writeln!(writer, "  }}")?;

        for ((u, v), weight) in graph.edge_weights() {
            let edge = edge_decorator(u, v, weight);
            writeln!(
                writer,
                "  \"{}\" -- \"{}\"{};",
                edge.from,
                edge.to,
                format_attrs(&edge.attrs)
            )?;
        }

        writeln!(writer, "}}")
    }

    /// Writes a unipartite graph using `Display`-based identifiers and no
    /// attributes.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn try_write_graph<V, W, Wr>(&self, graph: &Graph<V, W>, writer: Wr) -> Result<()>
    where
        V: Vertex + Display,
        W: EdgeWeight,
        Wr: Write,
    {
        self.try_write_graph_with(
            graph,
            writer,
            |v| DotNode::new(v.to_string()),
            |u, v, _| DotEdge::new(u.to_string(), v.to_string()),
        )
    }

    /// Writes a unipartite graph with custom node and edge decorators.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn try_write_graph_with<V, W, Wr, FV, FE>(
        &self,
        graph: &Graph<V, W>,
        mut writer: Wr,
        mut vnode_decorator: FV,
        mut edge_decorator: FE,
    ) -> Result<()>
    where
        V: Vertex,
        W: EdgeWeight,
        Wr: Write,
        FV: FnMut(&V) -> DotNode,
        FE: FnMut(&V, &V, &W) -> DotEdge,
    {
        writeln!(writer, "graph \"{}\" {{", self.graph_name)?;

        for v in graph.nodes() {
            let node = vnode_decorator(v);
            writeln!(writer, "  \"{}\"{};", node.id, format_attrs(&node.attrs))?;
        }

        for (edge, weight) in graph.edge_weights() {
            let dot_edge = edge_decorator(&edge.0, &edge.1, weight);
            writeln!(
                writer,
                "  \"{}\" -- \"{}\"{};",
                dot_edge.from,
                dot_edge.to,
                format_attrs(&dot_edge.attrs)
            )?;
        }

        writeln!(writer, "}}")
    }
}

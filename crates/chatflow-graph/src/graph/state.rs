//! State graph builder and executor.
//!
//! A [`StateGraph`] collects named async nodes and the unconditional edges
//! between them, then freezes into a [`CompiledGraph`] that can be invoked or
//! streamed. Nodes communicate only through the state value threaded along
//! the chain; invocations share nothing with each other.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures::stream::{self, Stream};
use tracing::debug;

use crate::constants::{END, START};
use crate::error::GraphError;
use crate::stream::{StreamChunk, StreamMode};

/// A node action that can be either sync or async.
pub type NodeAction<S> = Arc<dyn Fn(S) -> Pin<Box<dyn Future<Output = S> + Send>> + Send + Sync>;

/// A graph whose nodes communicate by reading and writing a shared state.
///
/// The signature of each node is `State -> State`. Each node has at most one
/// outgoing edge, so control flow is a single deterministic chain from
/// [`START`] to [`END`].
///
/// # Example
///
/// ```ignore
/// use chatflow_graph::{StateGraph, START, END};
///
/// let mut graph = StateGraph::<State>::new();
///
/// graph.add_node("greet", |mut state| async move {
///     state.text.push_str("hello");
///     state
/// });
///
/// graph.add_edge(START, "greet");
/// graph.add_edge("greet", END);
///
/// let compiled = graph.compile()?;
/// let result = compiled.invoke(initial_state).await;
/// ```
pub struct StateGraph<S>
where
    S: Clone + Send + 'static,
{
    /// Declared nodes by name.
    nodes: HashMap<String, NodeAction<S>>,
    /// Unconditional transitions, keyed by source node.
    ///
    /// Keying by source is what makes a second outgoing edge from one node
    /// unrepresentable; `add_edge` rejects the attempt outright.
    edges: HashMap<String, String>,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + 'static,
{
    /// Create a new StateGraph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    /// Add a new node to the graph.
    ///
    /// # Panics
    ///
    /// Panics if a node with the same name already exists, or if the name is
    /// a reserved value ([`START`] or [`END`]).
    pub fn add_node<F, Fut>(&mut self, name: impl Into<String>, action: F) -> &mut Self
    where
        F: Fn(S) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = S> + Send + 'static,
    {
        let name = name.into();

        if name == START || name == END {
            panic!("Node name '{}' is reserved", name);
        }

        if self.nodes.contains_key(&name) {
            panic!("Node '{}' already exists", name);
        }

        let action: NodeAction<S> = Arc::new(move |state| {
            let fut = action(state);
            Box::pin(fut)
        });

        self.nodes.insert(name, action);
        self
    }

    /// Add the directed edge `start -> end`.
    ///
    /// # Panics
    ///
    /// Panics if [`END`] is used as a start node, if [`START`] is used as an
    /// end node, or if `start` already has an outgoing edge — transitions are
    /// unconditional, so a node can only ever lead one place.
    pub fn add_edge(&mut self, start: impl Into<String>, end: impl Into<String>) -> &mut Self {
        let start = start.into();
        let end = end.into();

        if start == END {
            panic!("END cannot be a start node");
        }

        if end == START {
            panic!("START cannot be an end node");
        }

        if self.edges.contains_key(&start) {
            panic!("Node '{}' already has an outgoing edge", start);
        }

        self.edges.insert(start, end);
        self
    }

    /// Set the entry point of the graph.
    ///
    /// Equivalent to `add_edge(START, key)`.
    pub fn set_entry_point(&mut self, key: impl Into<String>) -> &mut Self {
        self.add_edge(START, key)
    }

    /// Set the finish point of the graph.
    ///
    /// Equivalent to `add_edge(key, END)`.
    pub fn set_finish_point(&mut self, key: impl Into<String>) -> &mut Self {
        self.add_edge(key, END)
    }

    /// Validate the graph structure.
    fn validate(&self) -> Result<(), GraphError> {
        if !self.edges.contains_key(START) {
            return Err(GraphError::MissingEntrypoint);
        }

        for (from, to) in &self.edges {
            if from != START && !self.nodes.contains_key(from) {
                return Err(GraphError::UnknownNode {
                    from: from.clone(),
                    to: to.clone(),
                    node: from.clone(),
                });
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(GraphError::UnknownNode {
                    from: from.clone(),
                    to: to.clone(),
                    node: to.clone(),
                });
            }
        }

        // Walk the single chain out of START: it must not revisit a node,
        // and every declared node must lie on it.
        let mut visited: HashSet<String> = HashSet::new();
        let mut cursor = self.edges.get(START);
        while let Some(node) = cursor {
            if node.as_str() == END {
                break;
            }
            if !visited.insert(node.clone()) {
                return Err(GraphError::Cycle(node.clone()));
            }
            cursor = self.edges.get(node);
        }

        for name in self.nodes.keys() {
            if !visited.contains(name) {
                return Err(GraphError::Unreachable(name.clone()));
            }
        }

        Ok(())
    }

    /// Compile the graph into a [`CompiledGraph`] that can be invoked.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] when the declared wiring is structurally
    /// invalid: no entrypoint, an edge to an undeclared node, an unreachable
    /// node, or a chain that loops back on itself.
    pub fn compile(self) -> Result<CompiledGraph<S>, GraphError> {
        self.validate()?;

        Ok(CompiledGraph {
            nodes: self.nodes,
            edges: self.edges,
        })
    }
}

/// A compiled state graph that can be invoked or streamed.
pub struct CompiledGraph<S>
where
    S: Clone + Send + 'static,
{
    nodes: HashMap<String, NodeAction<S>>,
    edges: HashMap<String, String>,
}

impl<S> CompiledGraph<S>
where
    S: Clone + Send + 'static,
{
    /// Invoke the graph with the given input state.
    ///
    /// The input is consumed and a new state is returned; nothing the caller
    /// retains is mutated, and consecutive invocations share no state.
    pub async fn invoke(&self, input: S) -> S {
        let mut state = input;
        let mut cursor = self.edges.get(START);

        while let Some(node) = cursor {
            if node.as_str() == END {
                break;
            }

            if let Some(action) = self.nodes.get(node) {
                debug!(node = %node, "executing node");
                state = action(state).await;
            }

            cursor = self.edges.get(node);
        }

        state
    }

    /// Stream the graph execution.
    ///
    /// Nodes execute lazily as the stream is polled, one chunk per executed
    /// node. In [`StreamMode::Values`] a terminal chunk for the virtual end
    /// node is emitted once the chain finishes.
    pub fn stream(
        &self,
        input: S,
        mode: StreamMode,
    ) -> Pin<Box<dyn Stream<Item = StreamChunk<S>> + Send>> {
        let nodes = self.nodes.clone();
        let edges = self.edges.clone();
        let first = edges.get(START).cloned();

        Box::pin(stream::unfold(
            (input, first, nodes, edges, mode),
            |(mut state, mut cursor, nodes, edges, mode)| async move {
                loop {
                    let node = cursor?;

                    if node.as_str() == END {
                        if mode == StreamMode::Values {
                            return Some((
                                StreamChunk::new(END, state.clone()),
                                (state, None, nodes, edges, mode),
                            ));
                        }
                        return None;
                    }

                    if let Some(action) = nodes.get(&node) {
                        state = action(state).await;
                        let next = edges.get(&node).cloned();
                        return Some((
                            StreamChunk::new(&node, state.clone()),
                            (state, next, nodes, edges, mode),
                        ));
                    }

                    cursor = edges.get(&node).cloned();
                }
            },
        ))
    }

    /// Get the graph structure for inspection.
    ///
    /// Nodes and edges are sorted by name so the output is stable.
    pub fn get_graph(&self) -> GraphStructure {
        let mut nodes: Vec<String> = self.nodes.keys().cloned().collect();
        nodes.sort();

        let mut edges: Vec<(String, String)> = self
            .edges
            .iter()
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect();
        edges.sort();

        GraphStructure { nodes, edges }
    }
}

/// Structure representing the declared wiring of a compiled graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStructure {
    /// Node names, sorted.
    pub nodes: Vec<String>,
    /// Edges as `(from, to)` pairs, sorted.
    pub edges: Vec<(String, String)>,
}

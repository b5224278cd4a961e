use std::collections::HashMap;

use indexmap::IndexMap;
use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use crate::model::structures::{
    constructor::{Constructor, ConstructorId},
    driver::{Driver, DriverId},
    edge_kind::EdgeKind,
    Elo
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Driver '{0}' not found")]
    DriverNotFound(String),

    #[error("Constructor '{0}' not found")]
    ConstructorNotFound(String)
}

/// In-memory rating state for every driver and constructor.
///
/// A contribution is stored once, keyed by (driver, constructor). The driver and
/// the constructor only index into that table, so the driver-side and
/// constructor-side views of a contribution cannot drift apart.
///
/// Insertion order of drivers, constructors and edges is preserved so that
/// exports and listings are deterministic.
#[derive(Debug, Default)]
pub struct RatingGraph {
    pub(crate) constructors: IndexMap<String, Constructor>,
    pub(crate) drivers: IndexMap<String, Driver>,
    pub(crate) contributions: HashMap<(DriverId, ConstructorId), Elo>,
    pub(crate) edges: IndexMap<(DriverId, ConstructorId), EdgeKind>
}

impl RatingGraph {
    pub fn new() -> RatingGraph {
        RatingGraph::default()
    }

    /// Returns the constructor with this exact name, registering a new one with
    /// a zero rating if it has not been seen yet.
    pub fn get_or_create_constructor(&mut self, name: &str) -> ConstructorId {
        if let Some(index) = self.constructors.get_index_of(name) {
            return ConstructorId(index);
        }

        debug!("Registering constructor {}", name);
        let (index, _) = self
            .constructors
            .insert_full(name.to_owned(), Constructor::new(name));

        ConstructorId(index)
    }

    /// Same as [`RatingGraph::get_or_create_constructor`] for drivers.
    pub fn get_or_create_driver(&mut self, name: &str) -> DriverId {
        if let Some(index) = self.drivers.get_index_of(name) {
            return DriverId(index);
        }

        debug!("Registering driver {}", name);
        let (index, _) = self.drivers.insert_full(name.to_owned(), Driver::new(name));

        DriverId(index)
    }

    /// Records that the driver has raced for the constructor. Adding an edge
    /// that already exists changes nothing, including its kind.
    pub fn add_edge(&mut self, driver: DriverId, constructor: ConstructorId) {
        self.insert_edge(driver, constructor, EdgeKind::Real);
    }

    pub(crate) fn insert_edge(&mut self, driver: DriverId, constructor: ConstructorId, kind: EdgeKind) {
        self.edges.entry((driver, constructor)).or_insert(kind);
    }

    /// Removes an edge created by a simulation. Real edges are left alone.
    /// The contribution written by the simulation is kept.
    pub fn remove_hypothetical_edge(&mut self, driver_name: &str, constructor_name: &str) -> Result<bool, GraphError> {
        let driver = self.driver_id(driver_name)?;
        let constructor = self.constructor_id(constructor_name)?;

        match self.edges.get(&(driver, constructor)) {
            Some(EdgeKind::Hypothetical) => {
                self.edges.shift_remove(&(driver, constructor));
                debug!("Removed hypothetical edge {} - {}", driver_name, constructor_name);
                Ok(true)
            }
            _ => Ok(false)
        }
    }

    /// Makes sure a contribution entry exists for the pair, seeding it with 0,
    /// and returns a handle to it.
    pub(crate) fn link(&mut self, driver: DriverId, constructor: ConstructorId) -> &mut Elo {
        self.drivers[driver.0].constructors.insert(constructor);
        self.constructors[constructor.0].drivers.insert(driver);

        self.contributions.entry((driver, constructor)).or_insert(0)
    }

    pub fn driver_id(&self, name: &str) -> Result<DriverId, GraphError> {
        self.drivers
            .get_index_of(name)
            .map(DriverId)
            .ok_or_else(|| GraphError::DriverNotFound(name.to_owned()))
    }

    pub fn constructor_id(&self, name: &str) -> Result<ConstructorId, GraphError> {
        self.constructors
            .get_index_of(name)
            .map(ConstructorId)
            .ok_or_else(|| GraphError::ConstructorNotFound(name.to_owned()))
    }

    pub fn driver(&self, name: &str) -> Option<&Driver> {
        self.drivers.get(name)
    }

    pub fn constructor(&self, name: &str) -> Option<&Constructor> {
        self.constructors.get(name)
    }

    pub fn driver_by_id(&self, id: DriverId) -> &Driver {
        &self.drivers[id.0]
    }

    pub fn constructor_by_id(&self, id: ConstructorId) -> &Constructor {
        &self.constructors[id.0]
    }

    pub fn drivers(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.values()
    }

    pub fn constructors(&self) -> impl Iterator<Item = &Constructor> {
        self.constructors.values()
    }

    /// Every (driver, constructor) edge in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&Driver, &Constructor, EdgeKind)> {
        self.edges
            .iter()
            .map(|((driver, constructor), kind)| (&self.drivers[driver.0], &self.constructors[constructor.0], *kind))
    }

    pub fn edge_kind(&self, driver_name: &str, constructor_name: &str) -> Option<EdgeKind> {
        let driver = self.drivers.get_index_of(driver_name)?;
        let constructor = self.constructors.get_index_of(constructor_name)?;

        self.edges.get(&(DriverId(driver), ConstructorId(constructor))).copied()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The driver's contribution for a constructor, read through the driver's index.
    pub fn driver_contribution(&self, driver_name: &str, constructor_name: &str) -> Option<Elo> {
        let (index, _, driver) = self.drivers.get_full(driver_name)?;
        let constructor = ConstructorId(self.constructors.get_index_of(constructor_name)?);

        if !driver.constructors.contains(&constructor) {
            return None;
        }

        self.contribution(DriverId(index), constructor)
    }

    /// The same value read through the constructor's roster.
    pub fn constructor_contribution(&self, constructor_name: &str, driver_name: &str) -> Option<Elo> {
        let (index, _, constructor) = self.constructors.get_full(constructor_name)?;
        let driver = DriverId(self.drivers.get_index_of(driver_name)?);

        if !constructor.drivers.contains(&driver) {
            return None;
        }

        self.contribution(driver, ConstructorId(index))
    }

    /// Contributions of a driver, one per constructor it holds an entry for.
    pub fn driver_contributions(&self, driver: DriverId) -> impl Iterator<Item = (&Constructor, Elo)> + '_ {
        self.drivers[driver.0]
            .constructors
            .iter()
            .filter_map(move |constructor| {
                let value = self.contribution(driver, *constructor)?;
                Some((&self.constructors[constructor.0], value))
            })
    }

    pub(crate) fn contribution(&self, driver: DriverId, constructor: ConstructorId) -> Option<Elo> {
        self.contributions.get(&(driver, constructor)).copied()
    }

    /// Drivers sorted by overall rating, highest first. Ties are broken by name.
    pub fn drivers_by_rating(&self) -> Vec<&Driver> {
        self.drivers
            .values()
            .sorted_by(|a, b| b.overall_rating.cmp(&a.overall_rating).then_with(|| a.name.cmp(&b.name)))
            .collect()
    }

    pub fn constructors_by_rating(&self) -> Vec<&Constructor> {
        self.constructors
            .values()
            .sorted_by(|a, b| b.overall_rating.cmp(&a.overall_rating).then_with(|| a.name.cmp(&b.name)))
            .collect()
    }
}

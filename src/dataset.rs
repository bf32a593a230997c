//! The fixed in-memory fleet dataset served by the listing endpoints.

use crate::wire::{Driver, Trip, Vehicle};

/// Seed records for trips, drivers, and vehicles, partitioned by customer.
///
/// Immutable after construction. Listing order is seed insertion order;
/// partition filters compare customer names by exact string equality.
#[derive(Debug, Clone)]
pub struct Dataset {
    trips: Vec<Trip>,
    drivers: Vec<Driver>,
    vehicles: Vec<Vehicle>,
}

impl Dataset {
    pub fn seed() -> Self {
        let trips = vec![
            trip(1, "Sao Paulo", "Rio de Janeiro", 1, 1, 1000.0, "Pepsi"),
            trip(2, "Buenos Aires", "Córdoba", 2, 5, 2000.0, "Coca Cola"),
            trip(3, "Valparaiso", "Santiago", 3, 6, 3000.0, "Fanta"),
        ];

        let drivers = vec![
            driver(1, "John", "Doe", 30, 4.5, "Pepsi"),
            driver(2, "Jane", "Doe", 25, 4.0, "Coca Cola"),
            driver(3, "John", "Perez", 35, 4.8, "Fanta"),
            driver(4, "Lucky", "Luke", 30, 4.5, "Pepsi"),
            driver(5, "Homer", "Simpson", 30, 4.5, "Coca Cola"),
            driver(6, "Lara", "Croft", 30, 4.5, "Fanta"),
        ];

        let vehicles = vec![
            vehicle(1, "ABC123", "Toyota", "Camry", 2022, "Pepsi"),
            vehicle(2, "DEF456", "Honda", "Civic", 2021, "Coca Cola"),
            vehicle(3, "GHI789", "Ford", "Mustang", 2020, "Fanta"),
            vehicle(4, "JKL012", "Chevrolet", "Camaro", 2019, "Pepsi"),
            vehicle(5, "MNO345", "Nissan", "Altima", 2018, "Coca Cola"),
            vehicle(6, "PQR678", "Subaru", "Impreza", 2017, "Fanta"),
        ];

        Self {
            trips,
            drivers,
            vehicles,
        }
    }

    /// Trips belonging to `customer_name`, in seed order.
    pub fn trips_for(&self, customer_name: &str) -> Vec<Trip> {
        self.trips
            .iter()
            .filter(|t| t.customer_name == customer_name)
            .cloned()
            .collect()
    }

    /// Drivers belonging to `customer_name`, in seed order.
    pub fn drivers_for(&self, customer_name: &str) -> Vec<Driver> {
        self.drivers
            .iter()
            .filter(|d| d.customer_name == customer_name)
            .cloned()
            .collect()
    }

    /// Vehicles belonging to `customer_name`, in seed order.
    pub fn vehicles_for(&self, customer_name: &str) -> Vec<Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.customer_name == customer_name)
            .cloned()
            .collect()
    }
}

fn trip(
    id: u32,
    origin: &str,
    destination: &str,
    driver_id: u32,
    vehicle_id: u32,
    informed_cargo_value: f64,
    customer_name: &str,
) -> Trip {
    Trip {
        id,
        origin: origin.to_owned(),
        destination: destination.to_owned(),
        driver_id,
        vehicle_id,
        informed_cargo_value,
        customer_name: customer_name.to_owned(),
    }
}

fn driver(
    id: u32,
    first_name: &str,
    last_name: &str,
    age: u32,
    rating: f64,
    customer_name: &str,
) -> Driver {
    Driver {
        id,
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        age,
        rating,
        customer_name: customer_name.to_owned(),
    }
}

fn vehicle(
    id: u32,
    license_plate: &str,
    brand: &str,
    model: &str,
    year: u32,
    customer_name: &str,
) -> Vehicle {
    Vehicle {
        id,
        license_plate: license_plate.to_owned(),
        brand: brand.to_owned(),
        model: model.to_owned(),
        year,
        customer_name: customer_name.to_owned(),
    }
}

//! Test modules for the plant-waterer binary.

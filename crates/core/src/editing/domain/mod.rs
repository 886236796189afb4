pub mod region_effect;

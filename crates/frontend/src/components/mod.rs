pub mod landmark_map;

pub mod pose_config;

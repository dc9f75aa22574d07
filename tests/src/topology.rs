mod integration;
mod render;

mod offsets;
mod timer;

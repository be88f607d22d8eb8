mod classification;
mod common;
mod session;

mod bearing;
mod rank;

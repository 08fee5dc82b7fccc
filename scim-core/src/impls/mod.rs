mod dynamic;
mod list;
mod map;
mod option;
mod scalar;

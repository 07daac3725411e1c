mod assessors;
mod common;

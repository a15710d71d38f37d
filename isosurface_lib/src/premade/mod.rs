// Some prebuilt transfer functions
// for datasets used in development.
// With so many different datasets, a user should
// write their own to satisfy their needs.

pub mod transfer_functions;

mod helpers;
mod login;
mod persistence;
mod scenario;

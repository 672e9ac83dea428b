mod gateway;

pub(crate) use gateway::PixgateGateway;

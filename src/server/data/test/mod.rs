mod curriculum;
